//! Wall-clock to progress conversion
//!
//! The only source of time in the simulation. Hosts pass a monotonic
//! millisecond timestamp (e.g. `performance.now()`) and phases read a
//! normalized [0, 1] progress value from it.

use serde::{Deserialize, Serialize};

/// A fixed-length phase timer started at a wall-clock timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressClock {
    start_ms: f64,
    duration_ms: f64,
}

impl ProgressClock {
    /// Start a phase of `duration_ms` at `now_ms`
    pub fn start(now_ms: f64, duration_ms: f64) -> Self {
        Self {
            start_ms: now_ms,
            duration_ms,
        }
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Milliseconds since the phase started (never negative)
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    /// `clamp((now - start) / duration, 0, 1)`
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms(now_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// True once progress has reached 1.0
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
