//=========================================================================
// Click Tracker
//
// Detects double and triple clicks from a stream of button presses.
//
// A press continues a click sequence when all of these hold:
// - it arrives within `double_click_time` of the previous press
// - the cursor moved at most `MAX_MOUSE_MOVE` pixels on each axis
// - it is the same kind of press (left/right/middle)
// - the sequence has not already reached three clicks
//
// Anything else starts a new sequence at one click.
//
//=========================================================================

//=== Internal Imports ====================================================

use crate::core::event::MouseEventKind;

//=== ClickTracker ========================================================

/// Successive-click counter.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    double_click_time: u32,
    count: u32,
    last_click_time: u32,
    last_x: i32,
    last_y: i32,
    last_kind: Option<MouseEventKind>,
}

impl ClickTracker {
    /// Maximum cursor travel (pixels, per axis) between successive clicks.
    pub const MAX_MOUSE_MOVE: i32 = 3;

    /// Default double-click interval in milliseconds.
    pub const DEFAULT_DOUBLE_CLICK_TIME: u32 = 500;

    pub fn new() -> Self {
        Self {
            double_click_time: Self::DEFAULT_DOUBLE_CLICK_TIME,
            count: 0,
            last_click_time: 0,
            last_x: 0,
            last_y: 0,
            last_kind: None,
        }
    }

    pub fn double_click_time(&self) -> u32 {
        self.double_click_time
    }

    pub fn set_double_click_time(&mut self, time_ms: u32) {
        self.double_click_time = time_ms;
    }

    /// Registers a press and returns how many successive clicks it completes.
    pub fn check(&mut self, x: i32, y: i32, kind: MouseEventKind, now_ms: u32) -> u32 {
        let continues = self.last_kind == Some(kind)
            && now_ms.wrapping_sub(self.last_click_time) < self.double_click_time
            && (self.last_x - x).abs() <= Self::MAX_MOUSE_MOVE
            && (self.last_y - y).abs() <= Self::MAX_MOUSE_MOVE
            && self.count < 3;

        if continues {
            self.count += 1;
        } else {
            self.count = 1;
        }

        self.last_kind = Some(kind);
        self.last_click_time = now_ms;
        self.last_x = x;
        self.last_y = y;

        self.count
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use MouseEventKind::*;

    #[test]
    fn single_press_counts_one() {
        let mut tracker = ClickTracker::new();
        assert_eq!(tracker.check(10, 10, LeftPressedDown, 1000), 1);
    }

    #[test]
    fn quick_presses_count_up_to_three_then_restart() {
        let mut tracker = ClickTracker::new();
        assert_eq!(tracker.check(10, 10, LeftPressedDown, 1000), 1);
        assert_eq!(tracker.check(11, 9, LeftPressedDown, 1100), 2);
        assert_eq!(tracker.check(12, 10, LeftPressedDown, 1200), 3);
        assert_eq!(tracker.check(12, 10, LeftPressedDown, 1300), 1);
    }

    #[test]
    fn slow_press_restarts_sequence() {
        let mut tracker = ClickTracker::new();
        tracker.check(10, 10, LeftPressedDown, 1000);
        assert_eq!(tracker.check(10, 10, LeftPressedDown, 1500), 1);
    }

    #[test]
    fn moving_too_far_restarts_sequence() {
        let mut tracker = ClickTracker::new();
        tracker.check(10, 10, LeftPressedDown, 1000);
        assert_eq!(tracker.check(14, 10, LeftPressedDown, 1050), 1);
    }

    #[test]
    fn different_button_restarts_sequence() {
        let mut tracker = ClickTracker::new();
        tracker.check(10, 10, LeftPressedDown, 1000);
        assert_eq!(tracker.check(10, 10, RightPressedDown, 1050), 1);
        assert_eq!(tracker.check(10, 10, RightPressedDown, 1100), 2);
    }

    #[test]
    fn custom_double_click_time() {
        let mut tracker = ClickTracker::new();
        tracker.set_double_click_time(100);
        tracker.check(0, 0, MiddlePressedDown, 0);
        assert_eq!(tracker.check(0, 0, MiddlePressedDown, 150), 1);
        assert_eq!(tracker.double_click_time(), 100);
    }
}
