//! Cricket Over - a six-ball batting timing game
//!
//! Core modules:
//! - `sim`: Frame-driven game state machine (clock, hit window, outcomes, over tracking)
//! - `anim`: Pure pose sampling for the ball and character rigs
//! - `ui`: HUD and result screen data
//! - `settings`: Player preferences
//! - `tuning`: Data-driven timing calibration

pub mod anim;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError, TuningPreset};

/// Game configuration constants
pub mod consts {
    /// Deliveries in an over
    pub const BALLS_PER_OVER: u8 = 6;
    /// Highest run value a single delivery can score
    pub const MAX_RUNS: u8 = 6;
    /// Largest frame gap (ms) the hosts feed into the simulation clock
    pub const MAX_FRAME_MS: f64 = 100.0;
    /// Simulated frame length for the headless host (60 Hz)
    pub const DEMO_FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Clamp to [0, 1]
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Position of `v` between `a` and `b` (0 at `a`, 1 at `b`), unclamped
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    (v - a) / (b - a)
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
