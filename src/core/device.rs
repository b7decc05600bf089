//=========================================================================
// Device Interface
//
// The contract between the engine and a platform device: the engine
// drives the frame loop through `run()` and queries/manipulates the
// window through the rest of the trait. Platform layers (see
// `platform::WinitDevice`) implement it.
//
//=========================================================================

//=== External Crates =====================================================

use thiserror::Error;

//=== Internal Imports ====================================================

use crate::core::event::{Event, EventReceiver};
use crate::core::timer::Timer;
use crate::core::video_modes::VideoModeList;

//=== DeviceError =========================================================

/// Device creation and runtime errors.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("graphics context error: {0}")]
    Context(String),

    #[error("joystick error: {0}")]
    Joystick(String),

    #[error("{0} is not supported by this device")]
    Unsupported(&'static str),

    #[error("device has been closed")]
    Closed,
}

impl From<glutin::error::Error> for DeviceError {
    fn from(err: glutin::error::Error) -> Self {
        Self::Context(err.to_string())
    }
}

//=== ColorFormat =========================================================

/// Pixel layout of the window's framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    R5G6B5,
    A1R5G5B5,
    R8G8B8,
    A8R8G8B8,
}

impl ColorFormat {
    /// Derives the format from colour depth and alpha presence.
    pub const fn from_bits(bits: u8, alpha: bool) -> Self {
        match (bits, alpha) {
            (16, true) => Self::A1R5G5B5,
            (16, false) => Self::R5G6B5,
            (_, true) => Self::A8R8G8B8,
            (_, false) => Self::R8G8B8,
        }
    }
}

//=== Joystick Info =======================================================

/// Whether a joystick has a point-of-view hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PovHat {
    Present,
    Absent,
    Unknown,
}

/// Description of an activated joystick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoystickInfo {
    /// Index reported in `JoystickEvent::joystick`.
    pub joystick: u8,
    pub name: String,
    pub buttons: u32,
    pub axes: u32,
    pub pov_hat: PovHat,
}

//=== GammaRamp ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaRamp {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub brightness: f32,
    pub contrast: f32,
}

//=== VideoDriver =========================================================

/// The part of the engine's video driver the device talks to.
pub trait VideoDriver {
    /// Called after the window's drawable size changed.
    fn on_resize(&mut self, width: u32, height: u32);
}

//=== Device ==============================================================

/// Engine-facing platform device.
pub trait Device {
    //--- Frame Loop -------------------------------------------------------

    /// Processes pending platform events. Returns `false` once the device
    /// wants to be closed.
    fn run(&mut self) -> bool;

    /// Gives up the rest of the current time slice.
    fn yield_now(&mut self);

    /// Sleeps for `time_ms`; with `pause_timer` the virtual clock does not
    /// advance while asleep.
    fn sleep(&mut self, time_ms: u32, pause_timer: bool);

    /// Asks the device to close; the next `run()` returns `false`.
    fn close_device(&mut self);

    //--- Events -----------------------------------------------------------

    fn set_event_receiver(&mut self, receiver: Box<dyn EventReceiver>);

    /// Delivers an event as if it came from the platform. Returns `true`
    /// if it was absorbed.
    fn post_event_from_user(&mut self, event: &Event) -> bool;

    fn timer(&self) -> &Timer;

    fn timer_mut(&mut self) -> &mut Timer;

    //--- Window -----------------------------------------------------------

    fn set_window_caption(&mut self, text: &str);

    /// Presents the last rendered frame. GL drivers present through their
    /// context manager, so this is a no-op for them.
    fn present(&mut self) -> Result<(), DeviceError>;

    fn set_resizable(&mut self, resizable: bool);

    fn minimize_window(&mut self);

    fn maximize_window(&mut self);

    /// Undoes minimize/maximize.
    fn restore_window(&mut self);

    /// Outer window position on the desktop, if the platform reports it.
    fn window_position(&self) -> Option<(i32, i32)>;

    fn is_fullscreen(&self) -> bool;

    /// Focused and not minimized; nothing needs to be drawn otherwise.
    fn is_window_active(&self) -> bool;

    fn is_window_focused(&self) -> bool;

    fn is_window_minimized(&self) -> bool;

    //--- Display ----------------------------------------------------------

    fn video_mode_list(&mut self) -> &VideoModeList;

    fn color_format(&self) -> ColorFormat;

    fn set_gamma_ramp(&mut self, ramp: GammaRamp) -> Result<(), DeviceError>;

    fn gamma_ramp(&self) -> Result<GammaRamp, DeviceError>;

    //--- Joysticks --------------------------------------------------------

    /// Opens all joysticks; afterwards `run()` posts one `JoystickEvent`
    /// per joystick per frame.
    fn activate_joysticks(&mut self) -> Result<Vec<JoystickInfo>, DeviceError>;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_format_from_bits() {
        assert_eq!(ColorFormat::from_bits(16, false), ColorFormat::R5G6B5);
        assert_eq!(ColorFormat::from_bits(16, true), ColorFormat::A1R5G5B5);
        assert_eq!(ColorFormat::from_bits(32, false), ColorFormat::R8G8B8);
        assert_eq!(ColorFormat::from_bits(32, true), ColorFormat::A8R8G8B8);
        assert_eq!(ColorFormat::from_bits(24, false), ColorFormat::R8G8B8);
    }

    #[test]
    fn unsupported_error_message() {
        let err = DeviceError::Unsupported("gamma ramp");
        assert_eq!(err.to_string(), "gamma ramp is not supported by this device");
    }

    #[test]
    fn device_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DeviceError>();
    }
}
