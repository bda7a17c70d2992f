//! Score and balls-remaining tracking for the six-ball over

use serde::{Deserialize, Serialize};

use super::outcome::RunOutcome;
use crate::consts::BALLS_PER_OVER;

/// What the over does after a delivery has been counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverStatus {
    /// More balls to bowl
    Continue,
    /// Wicket fell; the over ends early
    Dismissed,
    /// All six balls bowled without a wicket
    Completed,
}

/// Running match totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub score: u32,
    pub balls_remaining: u8,
    pub is_out: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh over: no runs, six balls, not out
    pub fn new() -> Self {
        Self {
            score: 0,
            balls_remaining: BALLS_PER_OVER,
            is_out: false,
        }
    }

    /// Balls bowled so far (including a dismissal ball)
    pub fn balls_faced(&self) -> u8 {
        BALLS_PER_OVER - self.balls_remaining
    }

    /// Over has ended, either way
    pub fn is_finished(&self) -> bool {
        self.is_out || self.balls_remaining == 0
    }

    /// Count one completed delivery.
    ///
    /// Always uses up a ball. Runs are added for a scoring shot; a zero
    /// outcome is a wicket and ends the over regardless of balls left.
    pub fn apply_outcome(&mut self, outcome: RunOutcome) -> OverStatus {
        self.balls_remaining = self.balls_remaining.saturating_sub(1);

        if outcome.is_dismissal() {
            self.is_out = true;
            return OverStatus::Dismissed;
        }

        self.score += u32::from(outcome.runs());
        if self.balls_remaining == 0 {
            OverStatus::Completed
        } else {
            OverStatus::Continue
        }
    }
}
