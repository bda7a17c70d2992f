//! Timing value to run outcome resolution
//!
//! Deviation from the centre of the hit window picks the run band:
//! 0 = perfect, 1 = window edge. Deterministic, no randomness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::timing::TimingSample;
use crate::consts::MAX_RUNS;
use crate::tuning::TuningError;

/// Run value outside 0-6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a valid run value (0-6)")]
pub struct InvalidRuns(pub u8);

/// Runs scored off one delivery. Zero is a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RunOutcome(u8);

impl RunOutcome {
    pub const OUT: RunOutcome = RunOutcome(0);
    pub const SIX: RunOutcome = RunOutcome(6);

    /// `None` for values above six
    pub fn new(runs: u8) -> Option<Self> {
        (runs <= MAX_RUNS).then_some(Self(runs))
    }

    #[inline]
    pub fn runs(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_dismissal(self) -> bool {
        self.0 == 0
    }

    /// Four or six
    pub fn is_boundary(self) -> bool {
        matches!(self.0, 4 | 6)
    }
}

impl TryFrom<u8> for RunOutcome {
    type Error = InvalidRuns;

    fn try_from(runs: u8) -> Result<Self, Self::Error> {
        Self::new(runs).ok_or(InvalidRuns(runs))
    }
}

impl From<RunOutcome> for u8 {
    fn from(outcome: RunOutcome) -> u8 {
        outcome.0
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Upper deviation bound (exclusive) for each run band.
///
/// Bands are checked in descending run order; anything at or past `one`
/// resolves to a dismissal, so every deviation in [0, 1] lands in a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunThresholds {
    pub six: f32,
    pub four: f32,
    pub three: f32,
    pub two: f32,
    pub one: f32,
}

impl Default for RunThresholds {
    fn default() -> Self {
        Self {
            six: 0.10,
            four: 0.25,
            three: 0.40,
            two: 0.55,
            one: 0.78,
        }
    }
}

impl RunThresholds {
    /// Bands in the order they are checked
    pub fn bands(&self) -> [(f32, u8); 5] {
        [
            (self.six, 6),
            (self.four, 4),
            (self.three, 3),
            (self.two, 2),
            (self.one, 1),
        ]
    }

    /// Thresholds must be strictly increasing within (0, 1]
    pub fn validate(&self) -> Result<(), TuningError> {
        let mut previous = 0.0f32;
        for (bound, runs) in self.bands() {
            if !bound.is_finite() || bound <= previous || bound > 1.0 {
                return Err(TuningError::InvalidThreshold { runs, bound });
            }
            previous = bound;
        }
        Ok(())
    }

    /// Map a deviation to runs
    pub fn runs_for(&self, deviation: f32) -> RunOutcome {
        self.bands()
            .into_iter()
            .find(|&(bound, _)| deviation < bound)
            .map(|(_, runs)| RunOutcome(runs))
            .unwrap_or(RunOutcome::OUT)
    }
}

/// Distance from the window centre: 0 at the centre, 1 at either edge
#[inline]
pub fn deviation(timing: f32) -> f32 {
    (timing - 0.5).abs() * 2.0
}

/// Resolve a swing. A swing outside the window is always a dismissal.
pub fn resolve(timing: Option<f32>, can_hit: bool, thresholds: &RunThresholds) -> RunOutcome {
    match (can_hit, timing) {
        (true, Some(t)) => thresholds.runs_for(deviation(t)),
        _ => RunOutcome::OUT,
    }
}

/// Resolve from a latched window sample
pub fn resolve_sample(sample: &TimingSample, thresholds: &RunThresholds) -> RunOutcome {
    resolve(sample.timing, sample.can_hit, thresholds)
}
