//! Whole-millisecond frame deltas that keep the sub-millisecond remainder.

use std::time::{Duration, Instant};

/// Turns wall-clock instants into integer `dt_ms` values for `update`.
///
/// Only the milliseconds handed out are consumed; the fraction left over
/// carries into the next frame, so the deltas sum to real elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Milliseconds elapsed since the previous tick.
    pub fn tick(&mut self, now: Instant) -> u64 {
        let dt_ms = now.saturating_duration_since(self.last_tick).as_millis() as u64;
        self.last_tick += Duration::from_millis(dt_ms);
        dt_ms
    }
}
