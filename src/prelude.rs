//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_device::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Device construction
pub use crate::builder::DeviceBuilder;
pub use crate::core::params::{CreationParameters, DriverType};
pub use crate::platform::{ContextManager, WinitDevice};

// Device interface
pub use crate::core::device::{ColorFormat, Device, DeviceError, JoystickInfo, VideoDriver};
pub use crate::core::timer::Timer;
pub use crate::core::video_modes::{VideoMode, VideoModeList};

// Events
pub use crate::core::event::{
    ButtonStates, Event, EventReceiver, JoystickEvent, KeyInput, MouseEventKind, MouseInput,
    UserEvent,
};
pub use crate::core::keycode::KeyCode;
