//! Hit window evaluation
//!
//! A hit can only connect while bowling progress is inside the window. The
//! position inside the window is the timing value the outcome is resolved from.

use serde::{Deserialize, Serialize};

use crate::inverse_lerp;
use crate::tuning::TuningError;

/// The sub-range of bowling progress during which a swing can connect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitWindow {
    pub start: f32,
    pub end: f32,
}

/// Result of evaluating one progress value against the window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimingSample {
    /// Progress is inside the window (inclusive)
    pub can_hit: bool,
    /// Normalized position inside the window, `Some` iff `can_hit`
    pub timing: Option<f32>,
}

impl TimingSample {
    /// Sample used before any tick of a delivery has run
    pub const CLOSED: TimingSample = TimingSample {
        can_hit: false,
        timing: None,
    };
}

impl HitWindow {
    /// Build a validated window (`0 <= start < end <= 1`)
    pub fn new(start: f32, end: f32) -> Result<Self, TuningError> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let in_range = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_range(self.start) || !in_range(self.end) || self.start >= self.end {
            return Err(TuningError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Progress value of a perfectly timed swing
    #[inline]
    pub fn midpoint(&self) -> f32 {
        (self.start + self.end) * 0.5
    }

    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }

    /// Evaluate a bowling progress value. Pure; no state.
    pub fn evaluate(&self, progress: f32) -> TimingSample {
        if self.contains(progress) {
            TimingSample {
                can_hit: true,
                timing: Some(inverse_lerp(self.start, self.end, progress).clamp(0.0, 1.0)),
            }
        } else {
            TimingSample::CLOSED
        }
    }
}
