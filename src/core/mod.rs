//=========================================================================
// Core Device Model
//
// Platform-independent half of the device layer: the engine-facing
// `Device` trait, the event vocabulary, and the small stateful helpers
// (timer, click tracking, video mode list) every platform shares.
//
// Nothing in here touches a window. Platform layers translate native
// events into these types and feed them through `EventDispatcher`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod click;
pub mod device;
pub mod dispatch;
pub mod event;
pub mod keycode;
pub mod params;
pub mod timer;
pub mod video_modes;

//=== Public API ==========================================================

pub use click::ClickTracker;
pub use device::{
    ColorFormat, Device, DeviceError, GammaRamp, JoystickInfo, PovHat, VideoDriver,
};
pub use dispatch::EventDispatcher;
pub use event::{
    ButtonStates, Event, EventReceiver, JoystickEvent, KeyInput, MouseEventKind, MouseInput,
    UserEvent,
};
pub use keycode::KeyCode;
pub use params::{CreationParameters, DriverType};
pub use timer::Timer;
pub use video_modes::{VideoMode, VideoModeList};
