//=========================================================================
// Key Map
//=========================================================================
//
// Lookup table from native key codes to engine `KeyCode`s.
//
// Architecture:
//   (native, engine) pairs → sort once by native → binary search per event
//
// The table is built once when the device is created. Native codes with
// no entry translate to `KeyCode::Unknown`. When a native code is listed
// twice, the first entry wins.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::keyboard::KeyCode as WinitKeyCode;

//=== Internal Dependencies ===============================================

use crate::core::keycode::KeyCode;

//=== KeyMap ==============================================================

/// Sorted native → engine key table.
#[derive(Debug, Clone)]
pub(crate) struct KeyMap<N: Ord + Copy> {
    entries: Vec<(N, KeyCode)>,
}

impl<N: Ord + Copy> KeyMap<N> {
    //--- Construction -----------------------------------------------------

    /// Builds the table from unsorted pairs.
    pub(crate) fn new(pairs: impl IntoIterator<Item = (N, KeyCode)>) -> Self {
        let mut entries: Vec<(N, KeyCode)> = pairs.into_iter().collect();
        // Stable sort keeps insertion order among equal keys for dedup.
        entries.sort_by_key(|&(native, _)| native);
        entries.dedup_by_key(|&mut (native, _)| native);
        Self { entries }
    }

    //--- Lookup -----------------------------------------------------------

    /// Translates a native key; unmapped keys yield `KeyCode::Unknown`.
    pub(crate) fn lookup(&self, native: N) -> KeyCode {
        self.entries
            .binary_search_by_key(&native, |&(n, _)| n)
            .map(|idx| self.entries[idx].1)
            .unwrap_or(KeyCode::Unknown)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

//=========================================================================
// Winit Table
//=========================================================================

impl KeyMap<WinitKeyCode> {
    /// Table for winit physical key codes.
    pub(crate) fn winit() -> Self {
        use WinitKeyCode as W;
        use KeyCode as K;

        Self::new([
            //--- Editing & Control ----------------------------------------

            (W::Backspace, K::Back),
            (W::Tab, K::Tab),
            (W::NumpadClear, K::Clear),
            (W::Enter, K::Return),
            (W::NumpadEnter, K::Return),
            (W::Pause, K::Pause),
            (W::CapsLock, K::Capital),
            (W::Escape, K::Escape),
            (W::Space, K::Space),

            //--- Navigation -----------------------------------------------

            (W::PageUp, K::Prior),
            (W::PageDown, K::Next),
            (W::End, K::End),
            (W::Home, K::Home),
            (W::ArrowLeft, K::Left),
            (W::ArrowUp, K::Up),
            (W::ArrowRight, K::Right),
            (W::ArrowDown, K::Down),
            (W::PrintScreen, K::Snapshot),
            (W::Insert, K::Insert),
            (W::Delete, K::Delete),
            (W::Help, K::Help),

            //--- Digits ---------------------------------------------------

            (W::Digit0, K::Key0), (W::Digit1, K::Key1), (W::Digit2, K::Key2),
            (W::Digit3, K::Key3), (W::Digit4, K::Key4), (W::Digit5, K::Key5),
            (W::Digit6, K::Key6), (W::Digit7, K::Key7), (W::Digit8, K::Key8),
            (W::Digit9, K::Key9),

            //--- Letters --------------------------------------------------

            (W::KeyA, K::KeyA), (W::KeyB, K::KeyB), (W::KeyC, K::KeyC),
            (W::KeyD, K::KeyD), (W::KeyE, K::KeyE), (W::KeyF, K::KeyF),
            (W::KeyG, K::KeyG), (W::KeyH, K::KeyH), (W::KeyI, K::KeyI),
            (W::KeyJ, K::KeyJ), (W::KeyK, K::KeyK), (W::KeyL, K::KeyL),
            (W::KeyM, K::KeyM), (W::KeyN, K::KeyN), (W::KeyO, K::KeyO),
            (W::KeyP, K::KeyP), (W::KeyQ, K::KeyQ), (W::KeyR, K::KeyR),
            (W::KeyS, K::KeyS), (W::KeyT, K::KeyT), (W::KeyU, K::KeyU),
            (W::KeyV, K::KeyV), (W::KeyW, K::KeyW), (W::KeyX, K::KeyX),
            (W::KeyY, K::KeyY), (W::KeyZ, K::KeyZ),

            //--- System ---------------------------------------------------

            (W::SuperLeft, K::LWin),
            (W::SuperRight, K::RWin),
            (W::ContextMenu, K::Apps),
            (W::Sleep, K::Sleep),
            (W::Power, K::Sleep),

            //--- Numpad ---------------------------------------------------

            (W::Numpad0, K::Numpad0), (W::Numpad1, K::Numpad1),
            (W::Numpad2, K::Numpad2), (W::Numpad3, K::Numpad3),
            (W::Numpad4, K::Numpad4), (W::Numpad5, K::Numpad5),
            (W::Numpad6, K::Numpad6), (W::Numpad7, K::Numpad7),
            (W::Numpad8, K::Numpad8), (W::Numpad9, K::Numpad9),
            (W::NumpadMultiply, K::Multiply),
            (W::NumpadAdd, K::Add),
            (W::NumpadComma, K::Separator),
            (W::NumpadSubtract, K::Subtract),
            (W::NumpadDecimal, K::Decimal),
            (W::NumpadDivide, K::Divide),

            //--- Function Keys --------------------------------------------

            (W::F1, K::F1), (W::F2, K::F2), (W::F3, K::F3), (W::F4, K::F4),
            (W::F5, K::F5), (W::F6, K::F6), (W::F7, K::F7), (W::F8, K::F8),
            (W::F9, K::F9), (W::F10, K::F10), (W::F11, K::F11), (W::F12, K::F12),
            (W::F13, K::F13), (W::F14, K::F14), (W::F15, K::F15), (W::F16, K::F16),
            (W::F17, K::F17), (W::F18, K::F18), (W::F19, K::F19), (W::F20, K::F20),
            (W::F21, K::F21), (W::F22, K::F22), (W::F23, K::F23), (W::F24, K::F24),

            //--- Locks & Modifiers ----------------------------------------

            (W::NumLock, K::NumLock),
            (W::ScrollLock, K::Scroll),
            (W::ShiftLeft, K::LShift),
            (W::ShiftRight, K::RShift),
            (W::ControlLeft, K::LControl),
            (W::ControlRight, K::RControl),
            (W::AltLeft, K::LMenu),
            (W::AltRight, K::RMenu),

            //--- Punctuation ----------------------------------------------

            // The `=`/`+` key on US layouts.
            (W::Equal, K::Plus),
            (W::Comma, K::Comma),
            (W::Minus, K::Minus),
            (W::Period, K::Period),
        ])
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_entries_regardless_of_input_order() {
        let map = KeyMap::new([(30u32, KeyCode::KeyC), (10, KeyCode::KeyA), (20, KeyCode::KeyB)]);
        assert_eq!(map.lookup(10), KeyCode::KeyA);
        assert_eq!(map.lookup(20), KeyCode::KeyB);
        assert_eq!(map.lookup(30), KeyCode::KeyC);
    }

    #[test]
    fn missing_key_is_unknown() {
        let map = KeyMap::new([(1u32, KeyCode::Space)]);
        assert_eq!(map.lookup(2), KeyCode::Unknown);
    }

    #[test]
    fn empty_map_is_unknown() {
        let map: KeyMap<u32> = KeyMap::new([]);
        assert_eq!(map.lookup(0), KeyCode::Unknown);
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn duplicate_native_code_keeps_first_entry() {
        let map = KeyMap::new([(5u32, KeyCode::Print), (5, KeyCode::Snapshot), (1, KeyCode::Tab)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.lookup(5), KeyCode::Print);
    }

    #[test]
    fn winit_table_core_keys() {
        let map = KeyMap::winit();
        assert_eq!(map.lookup(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(map.lookup(WinitKeyCode::Digit7), KeyCode::Key7);
        assert_eq!(map.lookup(WinitKeyCode::Backspace), KeyCode::Back);
        assert_eq!(map.lookup(WinitKeyCode::PageUp), KeyCode::Prior);
        assert_eq!(map.lookup(WinitKeyCode::CapsLock), KeyCode::Capital);
        assert_eq!(map.lookup(WinitKeyCode::AltRight), KeyCode::RMenu);
        assert_eq!(map.lookup(WinitKeyCode::NumpadAdd), KeyCode::Add);
        assert_eq!(map.lookup(WinitKeyCode::F15), KeyCode::F15);
        assert_eq!(map.lookup(WinitKeyCode::Power), KeyCode::Sleep);
    }

    #[test]
    fn print_screen_is_snapshot_not_print() {
        let map = KeyMap::winit();
        assert_eq!(map.lookup(WinitKeyCode::PrintScreen), KeyCode::Snapshot);
        assert!(map.entries.iter().all(|&(_, key)| key != KeyCode::Print));
    }

    #[test]
    fn winit_table_unmapped_key() {
        let map = KeyMap::winit();
        assert_eq!(map.lookup(WinitKeyCode::MediaPlayPause), KeyCode::Unknown);
    }

    #[test]
    fn winit_table_has_no_duplicates() {
        let map = KeyMap::winit();
        assert!(map.entries.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
