//! Data-driven timing calibration
//!
//! Every number that decides how a delivery plays out lives here: phase
//! durations, the hit window, run thresholds and the ball path control
//! points. Presets are kept side by side; none of them is the "right" one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{HitWindow, RunThresholds};

/// Rejected calibration
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("hit window must satisfy 0 <= start < end <= 1 (got {start}..{end})")]
    InvalidWindow { start: f32, end: f32 },

    #[error("threshold for {runs} runs is out of order or outside (0, 1]: {bound}")]
    InvalidThreshold { runs: u8, bound: f32 },

    #[error("{name} must be a positive number of milliseconds (got {value})")]
    InvalidDuration { name: &'static str, value: f64 },

    #[error("trajectory {0} is out of range")]
    InvalidTrajectory(&'static str),

    #[error("unknown tuning preset '{0}'")]
    UnknownPreset(String),

    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ball path control points and hit-flight pacing.
///
/// Distances are scene units along the pitch (negative z is the bowler's end).
/// Missing fields in an override take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trajectory {
    /// Bowling progress at which the bowler's body reaches the crease
    pub bowler_run_up_end: f32,
    /// Bowling progress at which the bowler's body finishes the stride
    pub bowler_stride_end: f32,
    /// Bowler's body z at the top of the run-up
    pub bowler_start_z: f32,
    /// Bowling progress at which the run-up ends and the delivery stride starts
    pub stride_start: f32,
    /// Bowling progress at which the ball leaves the hand
    pub release_point: f32,
    /// Bowling progress at which the ball reaches the batting zone
    pub bat_zone: f32,
    /// Release z
    pub release_z: f32,
    /// Pitching point z
    pub bounce_z: f32,
    /// Contact point z
    pub bat_z: f32,
    /// Batsman's stumps z
    pub stumps_z: f32,
    /// Hit flight progress per second
    pub flight_rate: f32,
    /// Flight progress at which the hit animation reports completion
    pub flight_complete: f32,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self {
            bowler_run_up_end: 0.30,
            bowler_stride_end: 0.50,
            bowler_start_z: -12.0,
            stride_start: 0.40,
            release_point: 0.55,
            bat_zone: 0.88,
            release_z: -10.0,
            bounce_z: -1.0,
            bat_z: 5.5,
            stumps_z: 6.5,
            flight_rate: 0.65,
            flight_complete: 1.15,
        }
    }
}

impl Trajectory {
    pub fn validate(&self) -> Result<(), TuningError> {
        let unit = |v: f32| v.is_finite() && v > 0.0 && v < 1.0;
        if !unit(self.stride_start) || !unit(self.release_point) || !unit(self.bat_zone) {
            return Err(TuningError::InvalidTrajectory("progress marker"));
        }
        if self.stride_start >= self.release_point || self.release_point >= self.bat_zone {
            return Err(TuningError::InvalidTrajectory("progress marker order"));
        }
        if !unit(self.bowler_run_up_end)
            || !unit(self.bowler_stride_end)
            || self.bowler_run_up_end >= self.bowler_stride_end
        {
            return Err(TuningError::InvalidTrajectory("bowler marker"));
        }
        if !(self.bowler_start_z.is_finite() && self.bowler_start_z < self.release_z) {
            return Err(TuningError::InvalidTrajectory("bowler_start_z"));
        }
        let pitch_ordered = self.release_z < self.bounce_z
            && self.bounce_z < self.bat_z
            && self.bat_z <= self.stumps_z;
        if !pitch_ordered {
            return Err(TuningError::InvalidTrajectory("pitch layout"));
        }
        if !(self.flight_rate.is_finite() && self.flight_rate > 0.0) {
            return Err(TuningError::InvalidTrajectory("flight_rate"));
        }
        if !(self.flight_complete.is_finite() && self.flight_complete > 0.0) {
            return Err(TuningError::InvalidTrajectory("flight_complete"));
        }
        Ok(())
    }

    /// Seconds of hit flight before the animation reports completion
    pub fn flight_secs(&self) -> f32 {
        self.flight_complete / self.flight_rate
    }
}

/// Complete calibration for one game variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Release of run-up to ball arriving at the stumps
    pub bowling_duration_ms: f64,
    /// Bat swing animation length
    pub swing_duration_ms: f64,
    /// Wait after "start game" before the first ball
    pub first_ball_delay_ms: f64,
    /// Wait between deliveries
    pub next_ball_delay_ms: f64,
    /// How long the run popup stays up after the hit animation
    pub result_display_ms: f64,
    /// Pause on the fallen stumps before the out screen
    pub out_display_ms: f64,
    pub hit_window: HitWindow,
    pub thresholds: RunThresholds,
    pub trajectory: Trajectory,
}

impl Default for Tuning {
    fn default() -> Self {
        TuningPreset::default().tuning()
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        let durations = [
            ("bowling_duration_ms", self.bowling_duration_ms),
            ("swing_duration_ms", self.swing_duration_ms),
            ("first_ball_delay_ms", self.first_ball_delay_ms),
            ("next_ball_delay_ms", self.next_ball_delay_ms),
            ("result_display_ms", self.result_display_ms),
            ("out_display_ms", self.out_display_ms),
        ];
        for (name, value) in durations {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::InvalidDuration { name, value });
            }
        }
        self.hit_window.validate()?;
        self.thresholds.validate()?;
        self.trajectory.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }
}

/// Named calibrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TuningPreset {
    /// Window 0.75-0.92, single cut off at 0.78
    #[default]
    Standard,
    /// Window 0.70-0.90, single cut off at 0.75
    Classic,
}

impl TuningPreset {
    pub const ALL: [TuningPreset; 2] = [TuningPreset::Standard, TuningPreset::Classic];

    pub fn as_str(&self) -> &'static str {
        match self {
            TuningPreset::Standard => "standard",
            TuningPreset::Classic => "classic",
        }
    }

    pub fn tuning(&self) -> Tuning {
        let base = Tuning {
            bowling_duration_ms: 2000.0,
            swing_duration_ms: 200.0,
            first_ball_delay_ms: 800.0,
            next_ball_delay_ms: 800.0,
            result_display_ms: 1200.0,
            out_display_ms: 1200.0,
            hit_window: HitWindow {
                start: 0.75,
                end: 0.92,
            },
            thresholds: RunThresholds::default(),
            trajectory: Trajectory::default(),
        };

        match self {
            TuningPreset::Standard => base,
            TuningPreset::Classic => Tuning {
                hit_window: HitWindow {
                    start: 0.70,
                    end: 0.90,
                },
                thresholds: RunThresholds {
                    one: 0.75,
                    ..RunThresholds::default()
                },
                ..base
            },
        }
    }
}

impl std::str::FromStr for TuningPreset {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "std" => Ok(TuningPreset::Standard),
            "classic" => Ok(TuningPreset::Classic),
            other => Err(TuningError::UnknownPreset(other.to_string())),
        }
    }
}
