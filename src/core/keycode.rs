//=========================================================================
// Engine Key Codes
//
// The engine's keyboard vocabulary. Every platform layer translates its
// native key identifiers into this enum before events reach the engine.
//
// Numbering follows the classic virtual-key layout (letters and digits
// share their ASCII codes), so codes stay stable across platforms and
// can be stored in config files or sent over the wire.
//
//=========================================================================

//=== KeyCode =============================================================

/// Engine key identifier.
///
/// Identifies a physical key position, not the character it produces.
/// `Unknown` (code 0) is reported for keys the platform layer has no
/// mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum KeyCode {
    /// Key without a mapping.
    Unknown = 0x00,

    //--- Editing & Control ------------------------------------------------

    Back = 0x08,
    Tab = 0x09,
    Clear = 0x0C,
    Return = 0x0D,
    Pause = 0x13,
    /// Caps Lock.
    Capital = 0x14,
    Escape = 0x1B,
    Space = 0x20,

    //--- Navigation -------------------------------------------------------

    /// Page Up.
    Prior = 0x21,
    /// Page Down.
    Next = 0x22,
    End = 0x23,
    Home = 0x24,
    Left = 0x25,
    Up = 0x26,
    Right = 0x27,
    Down = 0x28,
    /// Print key of some keyboards. Winit has no separate code for it; its
    /// `PrintScreen` maps to `Snapshot`.
    Print = 0x2A,
    /// Print Screen.
    Snapshot = 0x2C,
    Insert = 0x2D,
    Delete = 0x2E,
    Help = 0x2F,

    //--- Digits -----------------------------------------------------------

    Key0 = 0x30, Key1 = 0x31, Key2 = 0x32, Key3 = 0x33, Key4 = 0x34,
    Key5 = 0x35, Key6 = 0x36, Key7 = 0x37, Key8 = 0x38, Key9 = 0x39,

    //--- Letters ----------------------------------------------------------

    KeyA = 0x41, KeyB = 0x42, KeyC = 0x43, KeyD = 0x44, KeyE = 0x45,
    KeyF = 0x46, KeyG = 0x47, KeyH = 0x48, KeyI = 0x49, KeyJ = 0x4A,
    KeyK = 0x4B, KeyL = 0x4C, KeyM = 0x4D, KeyN = 0x4E, KeyO = 0x4F,
    KeyP = 0x50, KeyQ = 0x51, KeyR = 0x52, KeyS = 0x53, KeyT = 0x54,
    KeyU = 0x55, KeyV = 0x56, KeyW = 0x57, KeyX = 0x58, KeyY = 0x59,
    KeyZ = 0x5A,

    //--- System -----------------------------------------------------------

    /// Left Windows / Command / Super key.
    LWin = 0x5B,
    /// Right Windows / Command / Super key.
    RWin = 0x5C,
    /// Context menu key.
    Apps = 0x5D,
    Sleep = 0x5F,

    //--- Numpad -----------------------------------------------------------

    Numpad0 = 0x60, Numpad1 = 0x61, Numpad2 = 0x62, Numpad3 = 0x63,
    Numpad4 = 0x64, Numpad5 = 0x65, Numpad6 = 0x66, Numpad7 = 0x67,
    Numpad8 = 0x68, Numpad9 = 0x69,
    Multiply = 0x6A,
    Add = 0x6B,
    Separator = 0x6C,
    Subtract = 0x6D,
    Decimal = 0x6E,
    Divide = 0x6F,

    //--- Function Keys ----------------------------------------------------

    F1 = 0x70, F2 = 0x71, F3 = 0x72, F4 = 0x73, F5 = 0x74, F6 = 0x75,
    F7 = 0x76, F8 = 0x77, F9 = 0x78, F10 = 0x79, F11 = 0x7A, F12 = 0x7B,
    F13 = 0x7C, F14 = 0x7D, F15 = 0x7E, F16 = 0x7F, F17 = 0x80, F18 = 0x81,
    F19 = 0x82, F20 = 0x83, F21 = 0x84, F22 = 0x85, F23 = 0x86, F24 = 0x87,

    //--- Locks ------------------------------------------------------------

    NumLock = 0x90,
    /// Scroll Lock.
    Scroll = 0x91,

    //--- Modifiers --------------------------------------------------------

    LShift = 0xA0,
    RShift = 0xA1,
    LControl = 0xA2,
    RControl = 0xA3,
    /// Left Alt.
    LMenu = 0xA4,
    /// Right Alt / AltGr.
    RMenu = 0xA5,

    //--- Punctuation ------------------------------------------------------

    Plus = 0xBB,
    Comma = 0xBC,
    Minus = 0xBD,
    Period = 0xBE,
}

impl KeyCode {
    /// Stable numeric code of this key.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the shift, control and alt keys (either side).
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::LShift | Self::RShift | Self::LControl | Self::RControl | Self::LMenu | Self::RMenu
        )
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        Self::Unknown
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_use_ascii_codes() {
        assert_eq!(KeyCode::KeyA.code(), b'A');
        assert_eq!(KeyCode::KeyZ.code(), b'Z');
        assert_eq!(KeyCode::Key0.code(), b'0');
        assert_eq!(KeyCode::Key9.code(), b'9');
    }

    #[test]
    fn unknown_is_zero_and_default() {
        assert_eq!(KeyCode::Unknown.code(), 0);
        assert_eq!(KeyCode::default(), KeyCode::Unknown);
    }

    #[test]
    fn function_keys_are_contiguous() {
        assert_eq!(KeyCode::F1.code() + 11, KeyCode::F12.code());
        assert_eq!(KeyCode::F1.code() + 23, KeyCode::F24.code());
    }

    #[test]
    fn modifier_detection() {
        assert!(KeyCode::LShift.is_modifier());
        assert!(KeyCode::RMenu.is_modifier());
        assert!(!KeyCode::Space.is_modifier());
        assert!(!KeyCode::Capital.is_modifier());
    }
}
