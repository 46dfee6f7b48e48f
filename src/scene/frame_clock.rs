//! Frame timing
//!
//! Monotonic delta between frames. Headless runs and tests drive the clock
//! with fixed steps instead.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Instant,

    /// Seconds since the clock was created, summed from deltas
    pub elapsed: f64,

    pub frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.record(delta)
    }

    /// Advance by a fixed step without reading the wall clock
    pub fn tick_fixed(&mut self, delta: f32) -> f32 {
        self.record(delta)
    }

    fn record(&mut self, delta: f32) -> f32 {
        self.elapsed += delta as f64;
        self.frame_count += 1;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ticks_accumulate() {
        let mut clock = FrameClock::new();
        for _ in 0..60 {
            clock.tick_fixed(1.0 / 60.0);
        }
        assert_eq!(clock.frame_count, 60);
        assert!((clock.elapsed - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_wall_clock_delta_is_non_negative() {
        let mut clock = FrameClock::new();
        let delta = clock.tick();
        assert!(delta >= 0.0);
        assert_eq!(clock.frame_count, 1);
    }
}
