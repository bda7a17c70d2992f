//! Cancellable delayed transitions
//!
//! Every timer captures the scheduler generation it was armed in. A reset
//! bumps the generation and drops pending timers; anything that still
//! surfaces with an old generation is discarded instead of applied.

use serde::{Deserialize, Serialize};

/// Deferred state machine transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// Idle -> Bowling for the next delivery
    StartBowling,
    /// Result shown long enough; set up the next ball
    NextBall,
    /// Show the "out" screen
    EnterOutPhase,
    /// Show the "over complete" screen
    EnterGameOverPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Timer {
    due_ms: f64,
    generation: u64,
    action: ScheduledAction,
}

/// Pending timers for one game controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    generation: u64,
    pending: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, action: ScheduledAction) -> bool {
        self.pending.iter().any(|t| t.action == action)
    }

    /// Arm `action` to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, action: ScheduledAction) {
        self.pending.push(Timer {
            due_ms: now_ms + delay_ms.max(0.0),
            generation: self.generation,
            action,
        });
    }

    /// Drop every pending timer and invalidate anything armed before now
    pub fn cancel_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending.clear();
    }

    /// Remove and return the next due action, earliest first.
    ///
    /// Returned one at a time so an action can cancel or arm timers before
    /// the next one is considered.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<ScheduledAction> {
        let generation = self.generation;
        self.pending.retain(|t| t.generation == generation);

        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(idx).action)
    }
}
