//! Interval spawner
//!
//! Accumulates elapsed time and fires once per interval. Excess time past the
//! interval is dropped, so a long frame never produces a burst of spawns.

use serde::{Deserialize, Serialize};

/// Spawn timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Milliseconds between spawns
    pub interval: f32,
    /// Milliseconds accumulated since the last spawn
    timer: f32,
}

impl Spawner {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            timer: 0.0,
        }
    }

    /// Add `dt_ms` and report whether the interval was reached.
    ///
    /// On firing the timer goes back to zero.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.timer += dt_ms.max(0.0);
        if self.timer >= self.interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// True while still waiting for the interval
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.timer < self.interval
    }
}
