//=========================================================================
// Platform Subsystem
//
// Winit implementation of the engine's `Device` interface.
//
// Architecture:
// ```text
//  Engine frame loop:
//  ┌──────────────────────────────────────────────────────────┐
//  │  device.run()                                            │
//  │   ├─ Timer::tick()                                       │
//  │   ├─ pump_app_events(timeout = 0)                        │
//  │   │    ↓ (DeviceApp: ApplicationHandler<UserEvent>)      │
//  │   │   InputProcessor  → KeyInput / MouseInput            │
//  │   │   WindowState     ← Resized / Focused / Occluded     │
//  │   │   EventDispatcher → EventReceiver (+ double clicks)  │
//  │   ├─ JoystickBackend::poll() → JoystickEvent per stick   │
//  │   └─ returns !closed                                     │
//  │                                                          │
//  │  engine renders, then ContextManager::swap_buffers()     │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Engine owns the loop**: events are pumped without blocking once
//   per `run()`, so the engine keeps its usual `while device.run()` shape
// - **Lazy window**: the window (and GL context for GL drivers) is created
//   in `resumed()`, which the first pump during construction triggers
// - **Sticky modifiers**: modifier state persists across events until
//   winit reports a change
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, and only one event loop may exist per process
//
//=========================================================================

//=== Submodules ==========================================================

pub mod context;
mod input_processor;
mod joystick;
mod keymap;
mod window_state;

//=== Standard Library Imports ============================================

use std::sync::Arc;
use std::time::Duration;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::device::{
    ColorFormat, Device, DeviceError, GammaRamp, JoystickInfo, VideoDriver,
};
use crate::core::dispatch::EventDispatcher;
use crate::core::event::{Event, EventReceiver, UserEvent};
use crate::core::params::{CreationParameters, DriverType};
use crate::core::timer::Timer;
use crate::core::video_modes::VideoModeList;
use input_processor::InputProcessor;
use joystick::JoystickBackend;
use window_state::WindowState;

pub use context::{ContextManager, GlutinContextManager};

//=== Window Setup ========================================================

/// Window attributes for the creation parameters.
fn window_attributes(params: &CreationParameters) -> WindowAttributes {
    let (width, height) = params.window_size;

    let mut attrs = Window::default_attributes()
        .with_title(params.window_title.clone())
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
        .with_transparent(params.with_alpha_channel);

    if params.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Fills `list` from `(width, height, depth)` monitor modes.
///
/// The desktop mode is the monitor's current size at the deepest depth
/// listed for it, or `fallback_depth` when no mode matches.
fn fill_video_modes(
    list: &mut VideoModeList,
    modes: impl IntoIterator<Item = (u32, u32, u16)>,
    desktop_size: Option<(u32, u32)>,
    fallback_depth: u16,
) {
    let mut desktop_depth = None;

    for (width, height, depth) in modes {
        list.add_mode(width, height, depth);
        if desktop_size == Some((width, height)) {
            desktop_depth = desktop_depth.max(Some(depth));
        }
    }

    if let Some((width, height)) = desktop_size {
        list.set_desktop(width, height, desktop_depth.unwrap_or(fallback_depth));
    }
}

//=== DeviceApp ===========================================================

/// Event-loop side of the device: everything the winit callbacks touch.
struct DeviceApp {
    params: CreationParameters,
    window: Option<Arc<Window>>,
    context: Option<Box<dyn ContextManager>>,
    video_driver: Option<Box<dyn VideoDriver>>,
    state: WindowState,
    input: InputProcessor,
    dispatcher: EventDispatcher,
    timer: Timer,
    joysticks: Option<Box<dyn JoystickBackend>>,
    video_modes: Option<VideoModeList>,
    init_error: Option<DeviceError>,
    closed: bool,
}

impl DeviceApp {
    fn new(params: CreationParameters) -> Self {
        let (width, height) = params.window_size;
        let state = WindowState::new(width, height, params.fullscreen);
        Self {
            params,
            window: None,
            context: None,
            video_driver: None,
            state,
            input: InputProcessor::new(),
            dispatcher: EventDispatcher::new(),
            timer: Timer::new(),
            joysticks: None,
            video_modes: None,
            init_error: None,
            closed: false,
        }
    }

    //--- Window Creation --------------------------------------------------

    fn create_window(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(Arc<Window>, Option<Box<dyn ContextManager>>), DeviceError> {
        let attrs = window_attributes(&self.params);

        if self.params.driver_type.is_gl() {
            let (window, context) =
                GlutinContextManager::create_window(event_loop, attrs, &self.params)?;
            let context: Box<dyn ContextManager> = Box::new(context);
            Ok((window, Some(context)))
        } else {
            let window = event_loop.create_window(attrs)?;
            Ok((Arc::new(window), None))
        }
    }

    //--- Event Handling ---------------------------------------------------

    fn handle_resize(&mut self, width: u32, height: u32) {
        if !self.state.resized(width, height) {
            return;
        }

        debug!(target: "device", "Window resized to {}x{}", width, height);

        if let Some(context) = self.context.as_mut() {
            context.resize(width, height);
        }
        if let Some(driver) = self.video_driver.as_mut() {
            driver.on_resize(width, height);
        }
    }

    fn handle_focus(&mut self, focused: bool) {
        trace!(target: "device", "Window focus: {}", focused);
        self.state.focus(focused);
        if !focused {
            // Releases are not delivered to unfocused windows.
            self.input.release_all();
        }
    }

    /// Fails with `Closed` once a close was requested.
    fn ensure_open(&self) -> Result<(), DeviceError> {
        if self.closed {
            Err(DeviceError::Closed)
        } else {
            Ok(())
        }
    }

    fn present(&self) -> Result<(), DeviceError> {
        self.ensure_open()?;
        if self.params.driver_type.is_software() {
            return Err(DeviceError::Unsupported("software presentation"));
        }
        Ok(())
    }

    fn poll_joysticks(&mut self) {
        let Some(backend) = self.joysticks.as_mut() else {
            return;
        };

        for (index, snapshot) in backend.poll().iter().enumerate() {
            let event = snapshot.to_event(index as u8);
            self.dispatcher.post(&Event::Joystick(event));
        }
    }

    fn load_video_modes(&self) -> VideoModeList {
        let mut list = VideoModeList::new();

        let monitor = self
            .window
            .as_ref()
            .and_then(|w| w.primary_monitor().or_else(|| w.current_monitor()));

        match monitor {
            Some(monitor) => {
                let size = monitor.size();
                fill_video_modes(
                    &mut list,
                    monitor
                        .video_modes()
                        .map(|m| (m.size().width, m.size().height, m.bit_depth())),
                    Some((size.width, size.height)),
                    u16::from(self.params.bits),
                );
            }
            None => {
                let (width, height) = self.params.window_size;
                list.set_desktop(width, height, u16::from(self.params.bits));
            }
        }

        debug!(target: "device", "Enumerated {} video modes", list.mode_count());
        list
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler<UserEvent> for DeviceApp {
    /// Creates the window on first resume; later resumes keep it.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || !self.params.driver_type.needs_window() {
            return;
        }

        match self.create_window(event_loop) {
            Ok((window, context)) => {
                let size = window.inner_size();
                info!(
                    target: "device",
                    "Window created: {}x{} @ {}x DPI ({:?})",
                    size.width,
                    size.height,
                    window.scale_factor(),
                    self.params.driver_type
                );
                self.state = WindowState::new(size.width, size.height, self.params.fullscreen);
                self.window = Some(window);
                self.context = context;
            }
            Err(e) => {
                error!(target: "device", "Window creation failed: {}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                info!(target: "device", "Window close requested");
                self.closed = true;
            }

            WindowEvent::Resized(size) => self.handle_resize(size.width, size.height),

            WindowEvent::Focused(focused) => self.handle_focus(focused),

            WindowEvent::Occluded(occluded) => {
                trace!(target: "device", "Window occluded: {}", occluded);
                self.state.occluded(occluded);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "device::input", "Modifiers changed: {:?}", modifiers);
                self.input.update_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, is_synthetic, .. } => {
                // Synthetic presses describe keys held while focus changed.
                if is_synthetic {
                    return;
                }
                let input = self.input.process_key_event(&event);
                self.dispatcher.post(&Event::Key(input));
            }

            WindowEvent::CursorMoved { position, .. } => {
                let input = self.input.process_cursor_moved(position.x, position.y);
                self.dispatcher.post_mouse(input, self.timer.real_time());
            }

            WindowEvent::CursorLeft { .. } => self.input.process_cursor_left(),

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(input) = self.input.process_mouse_button(button, state) {
                    self.dispatcher.post_mouse(input, self.timer.real_time());
                } else {
                    trace!(target: "device::input", "Mouse button {:?} has no event", button);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let input = self.input.process_wheel(delta);
                self.dispatcher.post_mouse(input, self.timer.real_time());
            }

            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        self.dispatcher.post(&Event::User(event));
    }
}

//=== WinitDevice =========================================================

/// Engine device backed by a winit window.
///
/// # Lifecycle
///
/// 1. **Construction**: `WinitDevice::new(params)` (or `DeviceBuilder`)
///    creates the event loop and pumps it once to open the window
/// 2. **Frame loop**: `while device.run() { ... }`
/// 3. **Shutdown**: close request or `close_device()` makes `run()` return
///    `false`; dropping the device destroys the context, then the window
///
/// # Thread Safety
///
/// Not Send/Sync; it must stay on the thread that created it. Other
/// threads reach the engine through [`WinitDevice::user_event_proxy`].
pub struct WinitDevice {
    event_loop: EventLoop<UserEvent>,
    proxy: EventLoopProxy<UserEvent>,
    app: DeviceApp,
}

impl WinitDevice {
    //--- Construction -----------------------------------------------------

    /// Creates the device and, unless the driver is `Null`, its window.
    ///
    /// # Errors
    ///
    /// - [`DeviceError::Unsupported`] for `Direct3D9`
    /// - [`DeviceError::EventLoop`] if an event loop already exists
    /// - [`DeviceError::Window`] / [`DeviceError::Context`] if the window
    ///   or GL context cannot be created
    pub fn new(params: CreationParameters) -> Result<Self, DeviceError> {
        if params.driver_type == DriverType::Direct3D9 {
            return Err(DeviceError::Unsupported("the Direct3D9 driver"));
        }

        let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
        let proxy = event_loop.create_proxy();
        let needs_window = params.driver_type.needs_window();

        let mut device = Self {
            event_loop,
            proxy,
            app: DeviceApp::new(params),
        };

        device.pump();

        if let Some(err) = device.app.init_error.take() {
            return Err(err);
        }
        if needs_window && device.app.window.is_none() {
            return Err(DeviceError::Context("window was not created on startup".into()));
        }

        info!(target: "device", "Device initialized");
        Ok(device)
    }

    //--- Accessors --------------------------------------------------------

    pub fn params(&self) -> &CreationParameters {
        &self.app.params
    }

    /// `None` for the `Null` driver.
    pub fn window(&self) -> Option<&Window> {
        self.app.window.as_deref()
    }

    /// Current drawable size in physical pixels.
    pub fn window_size(&self) -> (u32, u32) {
        self.app.state.size()
    }

    /// Sender for `Event::User` events; usable from any thread.
    pub fn user_event_proxy(&self) -> EventLoopProxy<UserEvent> {
        self.proxy.clone()
    }

    /// `None` unless a GL driver was requested.
    pub fn context_manager(&mut self) -> Option<&mut (dyn ContextManager + 'static)> {
        self.app.context.as_deref_mut()
    }

    /// Registers the driver that is told about window resizes.
    pub fn set_video_driver(&mut self, driver: Box<dyn VideoDriver>) {
        self.app.video_driver = Some(driver);
    }

    pub fn set_double_click_time(&mut self, time_ms: u32) {
        self.app.dispatcher.click_tracker_mut().set_double_click_time(time_ms);
    }

    //--- Cursor -----------------------------------------------------------

    pub fn set_cursor_visible(&mut self, visible: bool) {
        if let Some(window) = self.window() {
            window.set_cursor_visible(visible);
        }
    }

    /// Warps the cursor to window coordinates.
    pub fn set_cursor_position(&mut self, x: i32, y: i32) -> Result<(), DeviceError> {
        self.app.ensure_open()?;
        let window = self.app.window.as_ref().ok_or(DeviceError::Unsupported("cursor positioning"))?;
        window
            .set_cursor_position(PhysicalPosition::new(x, y))
            .map_err(|e| {
                warn!(target: "device::input", "Cursor warp failed: {}", e);
                DeviceError::Unsupported("cursor positioning")
            })?;
        self.app.input.set_cursor_position(x, y);
        Ok(())
    }

    /// Last cursor position in window pixels.
    pub fn cursor_position(&self) -> (i32, i32) {
        self.app.input.cursor_position()
    }

    /// Motion accumulated during the last `run()`.
    pub fn relative_cursor_position(&self) -> (f64, f64) {
        self.app.input.relative_motion()
    }

    //--- Internal Helpers -------------------------------------------------

    fn pump(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app);

        if let PumpStatus::Exit(code) = status {
            debug!(target: "device", "Event loop exited with code {}", code);
            self.app.closed = true;
        }
    }
}

//=== Device Implementation ===============================================

impl Device for WinitDevice {
    fn run(&mut self) -> bool {
        if self.app.closed {
            return false;
        }

        self.app.timer.tick();
        self.app.input.begin_frame();
        self.pump();
        self.app.poll_joysticks();

        !self.app.closed
    }

    fn yield_now(&mut self) {
        std::thread::yield_now();
    }

    fn sleep(&mut self, time_ms: u32, pause_timer: bool) {
        let pause = pause_timer && !self.app.timer.is_stopped();
        if pause {
            self.app.timer.stop();
        }

        std::thread::sleep(Duration::from_millis(u64::from(time_ms)));

        if pause {
            self.app.timer.start();
        }
    }

    fn close_device(&mut self) {
        info!(target: "device", "Device close requested");
        self.app.closed = true;
    }

    fn set_event_receiver(&mut self, receiver: Box<dyn EventReceiver>) {
        self.app.dispatcher.set_receiver(receiver);
    }

    fn post_event_from_user(&mut self, event: &Event) -> bool {
        self.app.dispatcher.post(event)
    }

    fn timer(&self) -> &Timer {
        &self.app.timer
    }

    fn timer_mut(&mut self) -> &mut Timer {
        &mut self.app.timer
    }

    fn set_window_caption(&mut self, text: &str) {
        if let Some(window) = self.window() {
            window.set_title(text);
        }
        self.app.params.window_title = text.to_owned();
    }

    fn present(&mut self) -> Result<(), DeviceError> {
        self.app.present()
    }

    fn set_resizable(&mut self, resizable: bool) {
        if resizable == self.app.state.resizable {
            return;
        }
        if let Some(window) = self.window() {
            window.set_resizable(resizable);
        }
        self.app.state.resizable = resizable;
    }

    fn minimize_window(&mut self) {
        if let Some(window) = self.window() {
            window.set_minimized(true);
        }
    }

    fn maximize_window(&mut self) {
        if let Some(window) = self.window() {
            window.set_maximized(true);
        }
    }

    fn restore_window(&mut self) {
        if let Some(window) = self.window() {
            window.set_minimized(false);
            window.set_maximized(false);
        }
    }

    fn window_position(&self) -> Option<(i32, i32)> {
        let position = self.window()?.outer_position().ok()?;
        Some((position.x, position.y))
    }

    fn is_fullscreen(&self) -> bool {
        self.app.state.fullscreen
    }

    fn is_window_active(&self) -> bool {
        self.app.state.is_active()
    }

    fn is_window_focused(&self) -> bool {
        self.app.state.focused
    }

    fn is_window_minimized(&self) -> bool {
        self.app.state.minimized
    }

    fn video_mode_list(&mut self) -> &VideoModeList {
        if self.app.video_modes.is_none() {
            self.app.video_modes = Some(self.app.load_video_modes());
        }
        self.app.video_modes.get_or_insert_with(VideoModeList::new)
    }

    fn color_format(&self) -> ColorFormat {
        ColorFormat::from_bits(self.app.params.bits, self.app.params.with_alpha_channel)
    }

    fn set_gamma_ramp(&mut self, _ramp: GammaRamp) -> Result<(), DeviceError> {
        Err(DeviceError::Unsupported("gamma ramp"))
    }

    fn gamma_ramp(&self) -> Result<GammaRamp, DeviceError> {
        Err(DeviceError::Unsupported("gamma ramp"))
    }

    fn activate_joysticks(&mut self) -> Result<Vec<JoystickInfo>, DeviceError> {
        self.app.ensure_open()?;
        let mut backend = joystick::default_backend()?;
        let infos = backend.activate();
        info!(target: "device::joystick", "Activated {} joysticks", infos.len());
        self.app.joysticks = Some(backend);
        Ok(infos)
    }
}

impl Drop for WinitDevice {
    fn drop(&mut self) {
        info!(target: "device", "Shutting down device");
        // The GL surface must go before the window it draws into.
        self.app.context = None;
        self.app.window = None;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::{c_void, CStr};
    use std::rc::Rc;

    use crossbeam_channel::unbounded;
    use winit::dpi::Size;
    use winit::event::{ElementState, MouseButton};
    use winit::keyboard::ModifiersState;

    use crate::core::event::JoystickEvent;
    use super::joystick::{Hat, JoystickSnapshot};

    type Calls = Rc<RefCell<Vec<(u32, u32)>>>;

    struct RecordingDriver(Calls);

    impl VideoDriver for RecordingDriver {
        fn on_resize(&mut self, width: u32, height: u32) {
            self.0.borrow_mut().push((width, height));
        }
    }

    struct RecordingContext(Calls);

    impl ContextManager for RecordingContext {
        fn generate_surface(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn destroy_surface(&mut self) {}
        fn generate_context(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn destroy_context(&mut self) {}
        fn activate_context(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn swap_buffers(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.0.borrow_mut().push((width, height));
        }
        fn proc_address(&self, _name: &CStr) -> *const c_void {
            std::ptr::null()
        }
    }

    struct FakeSticks(Vec<JoystickSnapshot>);

    impl JoystickBackend for FakeSticks {
        fn activate(&mut self) -> Vec<JoystickInfo> {
            Vec::new()
        }
        fn poll(&mut self) -> Vec<JoystickSnapshot> {
            self.0.clone()
        }
    }

    fn app() -> DeviceApp {
        DeviceApp::new(CreationParameters::default())
    }

    //=====================================================================
    // DeviceApp Tests
    //=====================================================================

    #[test]
    fn resize_notifies_driver_and_context_only_on_change() {
        let driver_calls = Calls::default();
        let context_calls = Calls::default();
        let mut app = app();
        app.video_driver = Some(Box::new(RecordingDriver(Rc::clone(&driver_calls))));
        app.context = Some(Box::new(RecordingContext(Rc::clone(&context_calls))));

        app.handle_resize(800, 600);
        app.handle_resize(0, 0);
        assert!(app.state.minimized);
        app.handle_resize(1024, 768);

        assert_eq!(*driver_calls.borrow(), vec![(1024, 768)]);
        assert_eq!(*context_calls.borrow(), vec![(1024, 768)]);
        assert_eq!(app.state.size(), (1024, 768));
        assert!(!app.state.minimized);
    }

    #[test]
    fn losing_focus_releases_buttons_and_modifiers() {
        let mut app = app();
        app.handle_focus(true);
        app.input.update_modifiers(ModifiersState::SHIFT);
        app.input.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        app.handle_focus(false);

        assert!(!app.state.focused);
        assert!(app.input.button_states().is_empty());
        assert!(!app.input.modifiers().shift);
    }

    #[test]
    fn joysticks_post_one_event_each_in_activation_order() {
        let (tx, rx) = unbounded();
        let mut app = app();
        app.dispatcher.set_receiver(Box::new(tx));
        app.joysticks = Some(Box::new(FakeSticks(vec![
            JoystickSnapshot {
                buttons: vec![true],
                axes: vec![],
                hat: None,
            },
            JoystickSnapshot {
                buttons: vec![false, true],
                axes: vec![],
                hat: Some(Hat::Down),
            },
        ])));

        app.poll_joysticks();

        let events: Vec<JoystickEvent> = rx
            .try_iter()
            .filter_map(|e| match e {
                Event::Joystick(j) => Some(j),
                _ => None,
            })
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!((events[0].joystick, events[0].button_states), (0, 0b01));
        assert_eq!((events[1].joystick, events[1].button_states), (1, 0b10));
        assert_eq!(events[1].pov, 18000);
    }

    #[test]
    fn no_joystick_events_before_activation() {
        let (tx, rx) = unbounded();
        let mut app = app();
        app.dispatcher.set_receiver(Box::new(tx));
        app.poll_joysticks();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_device_reports_closed() {
        let mut app = app();
        assert!(app.present().is_ok());

        app.closed = true;
        assert!(matches!(app.ensure_open(), Err(DeviceError::Closed)));
        assert!(matches!(app.present(), Err(DeviceError::Closed)));
    }

    #[test]
    fn software_driver_cannot_present() {
        let app = DeviceApp::new(CreationParameters {
            driver_type: DriverType::Software,
            ..CreationParameters::default()
        });
        assert!(matches!(app.present(), Err(DeviceError::Unsupported(_))));
    }

    //=====================================================================
    // Window Setup Tests
    //=====================================================================

    #[test]
    fn window_attributes_follow_params() {
        let params = CreationParameters {
            window_title: "Demo".into(),
            window_size: (640, 480),
            ..CreationParameters::default()
        };
        let attrs = window_attributes(&params);

        assert_eq!(attrs.title, "Demo");
        assert!(!attrs.resizable);
        assert!(attrs.fullscreen.is_none());
        assert_eq!(
            attrs.inner_size,
            Some(Size::Physical(PhysicalSize::new(640, 480)))
        );
    }

    #[test]
    fn fullscreen_uses_borderless_mode() {
        let params = CreationParameters {
            fullscreen: true,
            ..CreationParameters::default()
        };
        let attrs = window_attributes(&params);
        assert_eq!(attrs.fullscreen, Some(Fullscreen::Borderless(None)));
    }

    #[test]
    fn video_modes_pick_deepest_desktop_depth() {
        let mut list = VideoModeList::new();
        fill_video_modes(
            &mut list,
            [(1920, 1080, 24), (1280, 720, 32), (1920, 1080, 32), (1920, 1080, 24)],
            Some((1920, 1080)),
            16,
        );

        assert_eq!(list.mode_count(), 3);
        assert_eq!(list.desktop_resolution(), (1920, 1080));
        assert_eq!(list.desktop_depth(), 32);
    }

    #[test]
    fn video_modes_fall_back_to_requested_depth() {
        let mut list = VideoModeList::new();
        fill_video_modes(&mut list, [(800, 600, 32)], Some((2560, 1440)), 16);

        assert_eq!(list.desktop_resolution(), (2560, 1440));
        assert_eq!(list.desktop_depth(), 16);
    }
}
