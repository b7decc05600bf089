//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit keyboard and mouse data into engine events.
//
// Architecture:
//   Winit Events → InputProcessor → KeyInput / MouseInput → EventDispatcher
//
// Stateful tracking: modifiers (sticky until the next ModifiersChanged),
// cursor position, held mouse buttons and per-frame relative motion
// (taken from cursor positions only).
// Every mouse event carries the button state *after* it was applied.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use super::keymap::KeyMap;
use crate::core::event::{ButtonStates, KeyInput, MouseEventKind, MouseInput};
use crate::core::keycode::KeyCode;

//=== Modifiers ===========================================================

/// Modifier keys the engine events report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

/// Winit normalizes platform keys (macOS Cmd → Super, Control → Ctrl).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
        }
    }
}

//=== InputProcessor ======================================================

/// Converts Winit input to engine events with stateful tracking.
pub(crate) struct InputProcessor {
    key_map: KeyMap<WinitKeyCode>,
    modifiers: Modifiers,
    cursor: (i32, i32),
    /// False until the first move after entering the window.
    cursor_inside: bool,
    relative: (f64, f64),
    buttons: ButtonStates,
}

impl InputProcessor {
    /// Pixel scroll distance treated as one wheel step.
    pub(crate) const PIXELS_PER_WHEEL_STEP: f64 = 120.0;

    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self::with_key_map(KeyMap::winit())
    }

    pub(crate) fn with_key_map(key_map: KeyMap<WinitKeyCode>) -> Self {
        debug!(target: "device::input", "Key map loaded with {} entries", key_map.len());
        Self {
            key_map,
            modifiers: Modifiers::default(),
            cursor: (0, 0),
            cursor_inside: false,
            relative: (0.0, 0.0),
            buttons: ButtonStates::NONE,
        }
    }

    //--- State ------------------------------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    pub(crate) fn cursor_position(&self) -> (i32, i32) {
        self.cursor
    }

    /// Overrides the tracked cursor position (after a cursor warp).
    pub(crate) fn set_cursor_position(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
        self.cursor_inside = true;
    }

    /// Relative motion accumulated since the last `begin_frame()`.
    pub(crate) fn relative_motion(&self) -> (f64, f64) {
        self.relative
    }

    /// Resets per-frame accumulators; called at the start of each pump.
    pub(crate) fn begin_frame(&mut self) {
        self.relative = (0.0, 0.0);
    }

    /// Drops held buttons and modifiers, e.g. when focus is lost.
    pub(crate) fn release_all(&mut self) {
        self.buttons = ButtonStates::NONE;
        self.modifiers = Modifiers::default();
    }

    //--- Keyboard ---------------------------------------------------------

    /// Converts a Winit key event.
    pub(crate) fn process_key_event(&self, event: &KeyEvent) -> KeyInput {
        let ch = event
            .text
            .as_ref()
            .and_then(|text| text.chars().next())
            .or_else(|| match &event.logical_key {
                Key::Character(s) => s.chars().next(),
                _ => None,
            });

        self.process_key(event.physical_key, event.state, ch)
    }

    /// Translates a physical key through the key map.
    ///
    /// Unmapped keys are still reported (as `KeyCode::Unknown`) so text
    /// input keeps working for keys without an engine code.
    pub(crate) fn process_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
        ch: Option<char>,
    ) -> KeyInput {
        let key = match physical_key {
            PhysicalKey::Code(code) => self.key_map.lookup(code),
            PhysicalKey::Unidentified(_) => KeyCode::Unknown,
        };

        KeyInput {
            ch,
            key,
            pressed_down: state == ElementState::Pressed,
            shift: self.modifiers.shift,
            control: self.modifiers.ctrl,
        }
    }

    //--- Mouse ------------------------------------------------------------

    /// Records a new cursor position (window pixels).
    ///
    /// Relative motion is the difference between successive positions.
    /// The first move after the cursor enters the window only seeds the
    /// position.
    pub(crate) fn process_cursor_moved(&mut self, x: f64, y: f64) -> MouseInput {
        let (new_x, new_y) = (x.round() as i32, y.round() as i32);
        if self.cursor_inside {
            let (old_x, old_y) = self.cursor;
            self.relative.0 += f64::from(new_x - old_x);
            self.relative.1 += f64::from(new_y - old_y);
        }
        self.cursor = (new_x, new_y);
        self.cursor_inside = true;

        self.mouse_input(MouseEventKind::Moved, 0.0)
    }

    /// The cursor left the window; the next move re-seeds the position.
    pub(crate) fn process_cursor_left(&mut self) {
        self.cursor_inside = false;
    }

    /// Converts a button press/release.
    ///
    /// Back/forward buttons only update `ButtonStates` (no event kind
    /// exists for them); other buttons are ignored.
    pub(crate) fn process_mouse_button(
        &mut self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<MouseInput> {
        let pressed = state == ElementState::Pressed;

        let (mask, kind) = match (button, pressed) {
            (WinitMouseButton::Left, true) => (ButtonStates::LEFT, Some(MouseEventKind::LeftPressedDown)),
            (WinitMouseButton::Left, false) => (ButtonStates::LEFT, Some(MouseEventKind::LeftUp)),
            (WinitMouseButton::Right, true) => (ButtonStates::RIGHT, Some(MouseEventKind::RightPressedDown)),
            (WinitMouseButton::Right, false) => (ButtonStates::RIGHT, Some(MouseEventKind::RightUp)),
            (WinitMouseButton::Middle, true) => (ButtonStates::MIDDLE, Some(MouseEventKind::MiddlePressedDown)),
            (WinitMouseButton::Middle, false) => (ButtonStates::MIDDLE, Some(MouseEventKind::MiddleUp)),
            (WinitMouseButton::Back, _) => (ButtonStates::EXTRA1, None),
            (WinitMouseButton::Forward, _) => (ButtonStates::EXTRA2, None),
            _ => return None,
        };

        if pressed {
            self.buttons.insert(mask);
        } else {
            self.buttons.remove(mask);
        }

        kind.map(|kind| self.mouse_input(kind, 0.0))
    }

    /// Converts a scroll; positive values scroll away from the user.
    pub(crate) fn process_wheel(&self, delta: MouseScrollDelta) -> MouseInput {
        let wheel = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / Self::PIXELS_PER_WHEEL_STEP) as f32,
        };
        self.mouse_input(MouseEventKind::Wheel, wheel)
    }

    //--- Internal Helpers -------------------------------------------------

    fn mouse_input(&self, kind: MouseEventKind, wheel: f32) -> MouseInput {
        MouseInput {
            kind,
            x: self.cursor.0,
            y: self.cursor.1,
            wheel,
            shift: self.modifiers.shift,
            control: self.modifiers.ctrl,
            button_states: self.buttons,
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[cfg(test)]
    pub(crate) fn button_states(&self) -> ButtonStates {
        self.buttons
    }
}

//=========================================================================
// Tests
//=========================================================================
