//=========================================================================
// Device Timer
//
// Real time plus a virtual clock the engine can pause and scale.
//
// Architecture:
// ```text
//  real_time()  ── monotonic ms since the timer was created
//      │
//  tick()       ── samples real time once per frame (static time)
//      │
//  time()       ── last_virtual + (static - start_real) * speed
// ```
//
// Virtual time only advances on `tick()`, so every system reading it in
// the same frame sees the same value. `stop()`/`start()` nest: the clock
// runs again only once every `stop()` has been matched by a `start()`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== Timer ===============================================================

/// Frame timer with a pausable, scalable virtual clock.
#[derive(Debug, Clone)]
pub struct Timer {
    origin: Instant,
    start_real_time: u32,
    static_time: u32,
    last_virtual_time: u32,
    speed: f32,
    stop_counter: i32,
}

impl Timer {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            start_real_time: 0,
            static_time: 0,
            last_virtual_time: 0,
            speed: 1.0,
            stop_counter: 0,
        }
    }

    //--- Real Time --------------------------------------------------------

    /// Milliseconds since the timer was created. Wraps after ~49 days.
    pub fn real_time(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }

    //--- Virtual Time -----------------------------------------------------

    /// Current virtual time in milliseconds.
    pub fn time(&self) -> u32 {
        if self.is_stopped() {
            return self.last_virtual_time;
        }
        let elapsed = self.static_time.wrapping_sub(self.start_real_time) as f32;
        self.last_virtual_time
            .wrapping_add((elapsed * self.speed) as u32)
    }

    /// Samples real time; called once per frame by the device.
    pub fn tick(&mut self) {
        let now = self.real_time();
        self.tick_at(now);
    }

    pub(crate) fn tick_at(&mut self, real_time: u32) {
        self.static_time = real_time;
    }

    /// Sets the virtual clock to `time` ms.
    pub fn set_time(&mut self, time: u32) {
        let now = self.real_time();
        self.set_time_at(time, now);
    }

    fn set_time_at(&mut self, time: u32, real_time: u32) {
        self.static_time = real_time;
        self.start_real_time = real_time;
        self.last_virtual_time = time;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets the virtual clock speed; negative values clamp to zero.
    pub fn set_speed(&mut self, speed: f32) {
        let current = self.time();
        self.set_time_at(current, self.static_time);
        self.speed = speed.max(0.0);
    }

    //--- Stop / Start -----------------------------------------------------

    /// Freezes the virtual clock. Calls nest.
    pub fn stop(&mut self) {
        if !self.is_stopped() {
            self.last_virtual_time = self.time();
        }
        self.stop_counter -= 1;
    }

    /// Undoes one `stop()`; the clock resumes when all stops are undone.
    pub fn start(&mut self) {
        self.stop_counter += 1;
        if !self.is_stopped() {
            let current = self.last_virtual_time;
            self.set_time_at(current, self.static_time);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_counter < 0
    }
}

impl Default for Timer {
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

    #[test]
    fn virtual_time_follows_ticks() {
        let mut timer = Timer::new();
        timer.set_time_at(0, 0);

        timer.tick_at(250);
        assert_eq!(timer.time(), 250);

        timer.tick_at(400);
        assert_eq!(timer.time(), 400);
    }

    #[test]
    fn stopped_timer_freezes() {
        let mut timer = Timer::new();
        timer.set_time_at(0, 0);
        timer.tick_at(100);

        timer.stop();
        assert!(timer.is_stopped());

        timer.tick_at(900);
        assert_eq!(timer.time(), 100);
    }

    #[test]
    fn stops_nest() {
        let mut timer = Timer::new();
        timer.stop();
        timer.stop();
        timer.start();
        assert!(timer.is_stopped());
        timer.start();
        assert!(!timer.is_stopped());
    }

    #[test]
    fn restart_resumes_from_frozen_value() {
        let mut timer = Timer::new();
        timer.set_time_at(0, 0);
        timer.tick_at(100);
        timer.stop();

        timer.tick_at(600);
        timer.start();
        assert_eq!(timer.time(), 100);

        timer.tick_at(650);
        assert_eq!(timer.time(), 150);
    }

    #[test]
    fn speed_scales_elapsed_time() {
        let mut timer = Timer::new();
        timer.set_time_at(0, 0);
        timer.set_speed(2.0);

        timer.tick_at(100);
        assert_eq!(timer.time(), 200);
    }

    #[test]
    fn negative_speed_clamps_to_zero() {
        let mut timer = Timer::new();
        timer.set_speed(-3.0);
        assert_eq!(timer.speed(), 0.0);
    }
}
