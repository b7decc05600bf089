//=========================================================================
// Engine Event Types
//
// The engine-side representation of everything the device layer reports:
// mouse, keyboard, joystick and user-defined events.
//
// Event Flow:
// ```text
// Platform Layer (Winit / gilrs)
//         ↓
//    InputProcessor (translation)
//         ↓
//    Event (this module)
//         ↓
//    EventDispatcher → EventReceiver (engine / application)
// ```
//
// Design:
// - All payloads are `Copy`; posting an event never allocates
// - Button and modifier state travel with every mouse event so receivers
//   never have to track it themselves
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::Sender;

//=== Internal Imports ====================================================

use crate::core::keycode::KeyCode;

//=== ButtonStates ========================================================

/// Set of mouse buttons currently held down.
///
/// Stored as a bit mask so it can be compared and copied cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonStates(u32);

impl ButtonStates {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(0x01);
    pub const RIGHT: Self = Self(0x02);
    pub const MIDDLE: Self = Self(0x04);
    /// First extra button (usually "back").
    pub const EXTRA1: Self = Self(0x08);
    /// Second extra button (usually "forward").
    pub const EXTRA2: Self = Self(0x10);

    /// Raw bit mask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears only the bits of `other`; all other buttons stay held.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

//=== MouseEventKind ======================================================

/// What happened in a [`MouseInput`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Moved,
    LeftPressedDown,
    RightPressedDown,
    MiddlePressedDown,
    LeftUp,
    RightUp,
    MiddleUp,
    /// Wheel turned; the amount is in [`MouseInput::wheel`].
    Wheel,
    LeftDoubleClick,
    RightDoubleClick,
    MiddleDoubleClick,
    LeftTripleClick,
    RightTripleClick,
    MiddleTripleClick,
}

impl MouseEventKind {
    /// Returns `true` for the three button-press kinds.
    pub const fn is_press(self) -> bool {
        matches!(
            self,
            Self::LeftPressedDown | Self::RightPressedDown | Self::MiddlePressedDown
        )
    }

    /// Double-click kind matching a press kind.
    pub const fn double_click(self) -> Option<Self> {
        match self {
            Self::LeftPressedDown => Some(Self::LeftDoubleClick),
            Self::RightPressedDown => Some(Self::RightDoubleClick),
            Self::MiddlePressedDown => Some(Self::MiddleDoubleClick),
            _ => None,
        }
    }

    /// Triple-click kind matching a press kind.
    pub const fn triple_click(self) -> Option<Self> {
        match self {
            Self::LeftPressedDown => Some(Self::LeftTripleClick),
            Self::RightPressedDown => Some(Self::RightTripleClick),
            Self::MiddlePressedDown => Some(Self::MiddleTripleClick),
            _ => None,
        }
    }
}

//=== MouseInput ==========================================================

/// Mouse event payload.
///
/// Coordinates are window-relative pixels with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseInput {
    pub kind: MouseEventKind,
    pub x: i32,
    pub y: i32,
    /// Wheel steps; positive away from the user. Zero unless `kind` is `Wheel`.
    pub wheel: f32,
    pub shift: bool,
    pub control: bool,
    /// Buttons held after this event was applied.
    pub button_states: ButtonStates,
}

impl MouseInput {
    /// Returns `true` if the left button is held.
    pub const fn is_left_pressed(&self) -> bool {
        self.button_states.contains(ButtonStates::LEFT)
    }

    pub const fn is_right_pressed(&self) -> bool {
        self.button_states.contains(ButtonStates::RIGHT)
    }

    pub const fn is_middle_pressed(&self) -> bool {
        self.button_states.contains(ButtonStates::MIDDLE)
    }
}

//=== KeyInput ============================================================

/// Keyboard event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    /// Character produced by the key, if any.
    pub ch: Option<char>,
    pub key: KeyCode,
    pub pressed_down: bool,
    pub shift: bool,
    pub control: bool,
}

//=== JoystickEvent =======================================================

/// Per-frame joystick state.
///
/// One event per active joystick is posted on every `run()` call, whether
/// or not anything changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoystickEvent {
    /// Index of the joystick as returned by `activate_joysticks`.
    pub joystick: u8,
    /// Bit `n` is set while button `n` is held.
    pub button_states: u32,
    /// Axis positions in `-32768..=32767`.
    pub axis: [i16; JoystickEvent::NUMBER_OF_AXES],
    /// Hat direction in hundredths of a degree, or [`JoystickEvent::POV_CENTERED`].
    pub pov: u16,
}

impl JoystickEvent {
    pub const NUMBER_OF_BUTTONS: usize = 32;
    pub const NUMBER_OF_AXES: usize = 6;
    pub const POV_CENTERED: u16 = 65535;

    pub const AXIS_X: usize = 0;
    pub const AXIS_Y: usize = 1;
    pub const AXIS_Z: usize = 2;
    pub const AXIS_R: usize = 3;
    pub const AXIS_U: usize = 4;
    pub const AXIS_V: usize = 5;

    /// Returns `true` if button `button` is held.
    pub const fn is_button_pressed(&self, button: u32) -> bool {
        button < Self::NUMBER_OF_BUTTONS as u32 && self.button_states & (1 << button) != 0
    }
}

//=== UserEvent ===========================================================

/// Opaque application event injected through the event loop proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UserEvent {
    pub data1: usize,
    pub data2: usize,
}

//=== Event ===============================================================

/// Event delivered to an [`EventReceiver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Mouse(MouseInput),
    Key(KeyInput),
    Joystick(JoystickEvent),
    User(UserEvent),
}

//=== EventReceiver =======================================================

/// Consumer of device events.
///
/// Returning `true` marks the event as absorbed.
pub trait EventReceiver {
    fn on_event(&mut self, event: &Event) -> bool;
}

impl<F> EventReceiver for F
where
    F: FnMut(&Event) -> bool,
{
    fn on_event(&mut self, event: &Event) -> bool {
        self(event)
    }
}

/// Forwards every event to another thread; never absorbs.
///
/// A disconnected receiver is ignored so the window can still be closed
/// after the consuming thread has gone away.
impl EventReceiver for Sender<Event> {
    fn on_event(&mut self, event: &Event) -> bool {
        if self.send(*event).is_err() {
            log::trace!(target: "device", "Event channel disconnected, dropping {:?}", event);
        }
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
