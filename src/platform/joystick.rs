//=========================================================================
// Joystick Support
//=========================================================================
//
// Polls joysticks once per frame and turns their state into
// `JoystickEvent`s.
//
// Architecture:
//   JoystickBackend::poll() → JoystickSnapshot → to_event() → JoystickEvent
//
// Backends only report raw state (buttons, normalized axes, hat); the
// conversion to engine ranges lives here so it is the same for every
// backend. The gilrs backend is compiled with the `joystick` feature.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::device::{DeviceError, JoystickInfo};
use crate::core::event::JoystickEvent;

//=== Hat =================================================================

/// Direction of a point-of-view hat.
///
/// Only backends construct the non-centered directions.
#[cfg_attr(not(feature = "joystick"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Hat {
    Centered,
    Up,
    RightUp,
    Right,
    RightDown,
    Down,
    LeftDown,
    Left,
    LeftUp,
}

impl Hat {
    /// Hat angle in hundredths of a degree, clockwise from up.
    pub(crate) const fn pov(self) -> u16 {
        match self {
            Self::Up => 0,
            Self::RightUp => 4500,
            Self::Right => 9000,
            Self::RightDown => 13500,
            Self::Down => 18000,
            Self::LeftDown => 22500,
            Self::Left => 27000,
            Self::LeftUp => 31500,
            Self::Centered => JoystickEvent::POV_CENTERED,
        }
    }

    /// Combines d-pad buttons into a hat direction; opposite presses cancel.
    #[cfg(any(test, feature = "joystick"))]
    pub(crate) fn from_dpad(up: bool, down: bool, left: bool, right: bool) -> Self {
        let vertical = up as i8 - down as i8;
        let horizontal = right as i8 - left as i8;
        match (vertical, horizontal) {
            (1, 0) => Self::Up,
            (1, 1) => Self::RightUp,
            (0, 1) => Self::Right,
            (-1, 1) => Self::RightDown,
            (-1, 0) => Self::Down,
            (-1, -1) => Self::LeftDown,
            (0, -1) => Self::Left,
            (1, -1) => Self::LeftUp,
            _ => Self::Centered,
        }
    }
}

//=== JoystickSnapshot ====================================================

/// Raw state of one joystick for the current frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct JoystickSnapshot {
    pub buttons: Vec<bool>,
    /// Axis positions normalized to `-1.0..=1.0`, down/right positive.
    pub axes: Vec<f32>,
    /// `None` when the joystick has no hat.
    pub hat: Option<Hat>,
}

impl JoystickSnapshot {
    /// Converts to an engine event.
    ///
    /// Only the first 32 buttons and 6 axes are reported; missing axes
    /// read as zero and a missing hat reads as centered.
    pub(crate) fn to_event(&self, index: u8) -> JoystickEvent {
        let button_states = self
            .buttons
            .iter()
            .take(JoystickEvent::NUMBER_OF_BUTTONS)
            .enumerate()
            .filter(|(_, pressed)| **pressed)
            .fold(0u32, |bits, (i, _)| bits | (1 << i));

        let mut axis = [0i16; JoystickEvent::NUMBER_OF_AXES];
        for (slot, value) in axis.iter_mut().zip(&self.axes) {
            *slot = axis_to_i16(*value);
        }

        JoystickEvent {
            joystick: index,
            button_states,
            axis,
            pov: self.hat.unwrap_or(Hat::Centered).pov(),
        }
    }
}

/// Scales a normalized axis value to the engine's signed 16-bit range.
pub(crate) fn axis_to_i16(value: f32) -> i16 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16
}

//=== JoystickBackend =====================================================

/// Source of joystick state.
pub(crate) trait JoystickBackend {
    /// Opens every available joystick and describes it. Indices in the
    /// returned list match `JoystickEvent::joystick`.
    fn activate(&mut self) -> Vec<JoystickInfo>;

    /// Current state of each activated joystick, in activation order.
    fn poll(&mut self) -> Vec<JoystickSnapshot>;
}

/// Creates the compiled-in backend.
#[cfg(feature = "joystick")]
pub(crate) fn default_backend() -> Result<Box<dyn JoystickBackend>, DeviceError> {
    Ok(Box::new(gilrs_backend::GilrsBackend::new()?))
}

#[cfg(not(feature = "joystick"))]
pub(crate) fn default_backend() -> Result<Box<dyn JoystickBackend>, DeviceError> {
    Err(DeviceError::Unsupported("joystick input"))
}

//=========================================================================
// gilrs Backend
//=========================================================================

#[cfg(feature = "joystick")]
mod gilrs_backend {
    use gilrs::{Axis, Button, GamepadId, Gilrs};
    use log::{info, warn};

    use super::{Hat, JoystickBackend, JoystickSnapshot};
    use crate::core::device::{DeviceError, JoystickInfo, PovHat};

    /// Joysticks beyond this many are not opened.
    const MAX_JOYSTICKS: usize = 256;

    const BUTTONS: [Button; 13] = [
        Button::South,
        Button::East,
        Button::North,
        Button::West,
        Button::LeftTrigger,
        Button::RightTrigger,
        Button::LeftTrigger2,
        Button::RightTrigger2,
        Button::Select,
        Button::Start,
        Button::Mode,
        Button::LeftThumb,
        Button::RightThumb,
    ];

    const AXES: [Axis; 6] = [
        Axis::LeftStickX,
        Axis::LeftStickY,
        Axis::LeftZ,
        Axis::RightStickX,
        Axis::RightStickY,
        Axis::RightZ,
    ];

    pub(crate) struct GilrsBackend {
        gilrs: Gilrs,
        active: Vec<GamepadId>,
    }

    impl GilrsBackend {
        pub(crate) fn new() -> Result<Self, DeviceError> {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => gilrs,
                Err(gilrs::Error::NotImplemented(dummy)) => {
                    warn!(target: "device::joystick", "Joysticks not supported on this platform");
                    dummy
                }
                Err(e) => return Err(DeviceError::Joystick(e.to_string())),
            };
            Ok(Self { gilrs, active: Vec::new() })
        }
    }

    impl JoystickBackend for GilrsBackend {
        fn activate(&mut self) -> Vec<JoystickInfo> {
            self.active.clear();
            let mut infos = Vec::new();

            for (index, (id, pad)) in self.gilrs.gamepads().take(MAX_JOYSTICKS).enumerate() {
                let pov_hat = if pad.button_code(Button::DPadUp).is_some() {
                    PovHat::Present
                } else {
                    PovHat::Absent
                };
                let info = JoystickInfo {
                    joystick: index as u8,
                    name: pad.name().to_string(),
                    buttons: BUTTONS.len() as u32,
                    axes: AXES.len() as u32,
                    pov_hat,
                };
                info!(
                    target: "device::joystick",
                    "Found joystick {}, {} axes, {} buttons '{}'",
                    info.joystick,
                    info.axes,
                    info.buttons,
                    info.name
                );
                self.active.push(id);
                infos.push(info);
            }

            infos
        }

        fn poll(&mut self) -> Vec<JoystickSnapshot> {
            // Draining the queue is what updates gilrs' cached state.
            while self.gilrs.next_event().is_some() {}

            self.active
                .iter()
                .map(|&id| {
                    let pad = self.gilrs.gamepad(id);
                    if !pad.is_connected() {
                        return JoystickSnapshot::default();
                    }

                    let buttons = BUTTONS.iter().map(|&b| pad.is_pressed(b)).collect();
                    let axes = AXES
                        .iter()
                        .map(|&axis| match axis {
                            // gilrs reports up as positive; the engine expects down.
                            Axis::LeftStickY | Axis::RightStickY => -pad.value(axis),
                            _ => pad.value(axis),
                        })
                        .collect();
                    let hat = Some(Hat::from_dpad(
                        pad.is_pressed(Button::DPadUp),
                        pad.is_pressed(Button::DPadDown),
                        pad.is_pressed(Button::DPadLeft),
                        pad.is_pressed(Button::DPadRight),
                    ));

                    JoystickSnapshot { buttons, axes, hat }
                })
                .collect()
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hat_directions_map_to_pov_angles() {
        assert_eq!(Hat::Up.pov(), 0);
        assert_eq!(Hat::RightUp.pov(), 4500);
        assert_eq!(Hat::Down.pov(), 18000);
        assert_eq!(Hat::LeftUp.pov(), 31500);
        assert_eq!(Hat::Centered.pov(), 65535);
    }

    #[test]
    fn dpad_combines_into_diagonals() {
        assert_eq!(Hat::from_dpad(true, false, false, true), Hat::RightUp);
        assert_eq!(Hat::from_dpad(false, true, true, false), Hat::LeftDown);
        assert_eq!(Hat::from_dpad(true, true, false, false), Hat::Centered);
        assert_eq!(Hat::from_dpad(false, false, false, false), Hat::Centered);
    }

    #[test]
    fn snapshot_packs_buttons_into_bits() {
        let snapshot = JoystickSnapshot {
            buttons: vec![true, false, true, true],
            axes: vec![],
            hat: None,
        };
        let event = snapshot.to_event(2);
        assert_eq!(event.joystick, 2);
        assert_eq!(event.button_states, 0b1101);
        assert_eq!(event.pov, JoystickEvent::POV_CENTERED);
    }

    #[test]
    fn snapshot_ignores_buttons_beyond_32() {
        let snapshot = JoystickSnapshot {
            buttons: vec![true; 40],
            axes: vec![],
            hat: None,
        };
        assert_eq!(snapshot.to_event(0).button_states, u32::MAX);
    }

    #[test]
    fn snapshot_scales_axes_and_zero_fills() {
        let snapshot = JoystickSnapshot {
            buttons: vec![],
            axes: vec![1.0, -1.0, 0.5],
            hat: Some(Hat::Left),
        };
        let event = snapshot.to_event(0);
        assert_eq!(event.axis[JoystickEvent::AXIS_X], 32767);
        assert_eq!(event.axis[JoystickEvent::AXIS_Y], -32767);
        assert_eq!(event.axis[JoystickEvent::AXIS_Z], 16384);
        assert_eq!(event.axis[JoystickEvent::AXIS_V], 0);
        assert_eq!(event.pov, 27000);
    }

    #[test]
    fn axis_conversion_clamps() {
        assert_eq!(axis_to_i16(3.0), i16::MAX);
        assert_eq!(axis_to_i16(-3.0), -i16::MAX);
        assert_eq!(axis_to_i16(f32::NAN), 0);
    }

    #[cfg(not(feature = "joystick"))]
    #[test]
    fn backend_unavailable_without_feature() {
        assert!(matches!(default_backend(), Err(DeviceError::Unsupported(_))));
    }
}
