//! Game state and core simulation types
//!
//! The controller owns the top-level phase and the match totals; the current
//! delivery owns its own progress, latched window sample and one-shot latches.
//! Presentation code only ever reads from here.

use serde::{Deserialize, Serialize};

use super::clock::ProgressClock;
use super::outcome::RunOutcome;
use super::over::{MatchState, OverStatus};
use super::schedule::{ScheduledAction, Scheduler};
use super::timing::TimingSample;
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for "start game"
    Start,
    /// Facing deliveries
    Playing,
    /// Dismissed; over ended early
    Out,
    /// All six balls faced
    GameOver,
}

/// Sub-state of a single delivery while `Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryState {
    /// Waiting for the bowler to start
    Idle,
    /// Ball on its way; hit input is live
    Bowling,
    /// Swing animation playing
    Hitting,
    /// Swing done, ball in flight / run popup showing
    Result,
    /// Wicket fell on this delivery
    Out,
}

/// How a wicket fell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dismissal {
    /// No shot offered before the ball hit the stumps
    Bowled,
    /// Swung before the hit window opened
    Early,
    /// Swung after the hit window closed
    Late,
    /// Swung inside the window but too far off centre to score
    Edged,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    PhaseChanged {
        phase: GamePhase,
    },
    DeliveryStarted {
        ball: u8,
    },
    BallReachedBat,
    Swing {
        outcome: RunOutcome,
        timing: Option<f32>,
    },
    SwingFinished,
    Dismissed {
        ball: u8,
        how: Dismissal,
    },
    DeliveryCompleted {
        ball: u8,
        outcome: RunOutcome,
        status: OverStatus,
    },
    OverComplete {
        score: u32,
    },
    Reset,
}

/// One bowled ball. Replaced wholesale at the start of each ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// 1-based ball number within the over
    pub number: u8,
    pub state: DeliveryState,
    /// Started when the delivery enters `Bowling`
    pub bowling: Option<ProgressClock>,
    /// Bowling progress; frozen once the delivery leaves `Bowling`
    pub progress: f32,
    /// Window sample from the most recent tick, read when a swing arrives
    pub sample: TimingSample,
    /// Started when the swing begins
    pub swing: Option<ProgressClock>,
    pub is_swinging: bool,
    pub swing_progress: f32,
    /// Wall-clock time the ball left the bat
    pub hit_started_ms: Option<f64>,
    /// Hit flight progress (unclamped; presentation decides completion)
    pub flight_progress: f32,
    /// Assigned once per delivery
    pub outcome: Option<RunOutcome>,
    pub dismissal: Option<Dismissal>,
    /// Latch: a swing has been taken this delivery
    pub swung: bool,
    /// Latch: the "ball reached bat" signal has been seen
    pub reached_bat: bool,
    /// Latch: this delivery has been applied to the match totals
    pub counted: bool,
}

impl Delivery {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            state: DeliveryState::Idle,
            bowling: None,
            progress: 0.0,
            sample: TimingSample::CLOSED,
            swing: None,
            is_swinging: false,
            swing_progress: 0.0,
            hit_started_ms: None,
            flight_progress: 0.0,
            outcome: None,
            dismissal: None,
            swung: false,
            reached_bat: false,
            counted: false,
        }
    }

    /// Ball has left the bat (scoring shot or edge)
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, DeliveryState::Hitting | DeliveryState::Result)
            || (self.state == DeliveryState::Out && self.hit_started_ms.is_some())
    }
}

/// Complete controller state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub delivery: Delivery,
    pub match_state: MatchState,
    pub tuning: Tuning,
    /// Timestamp of the latest tick
    pub now_ms: f64,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    pub(crate) scheduler: Scheduler,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh controller on the start screen
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Start,
            delivery: Delivery::new(1),
            match_state: MatchState::new(),
            tuning,
            now_ms: 0.0,
            events: Vec::new(),
            scheduler: Scheduler::new(),
        }
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::debug!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            self.emit(GameEvent::PhaseChanged { phase });
        }
    }

    pub(crate) fn schedule(&mut self, delay_ms: f64, action: ScheduledAction) {
        self.scheduler.schedule(self.now_ms, delay_ms, action);
    }

    /// Scheduler generation; bumps on every reset
    pub fn generation(&self) -> u64 {
        self.scheduler.generation()
    }

    /// Number of armed delayed transitions
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Hit input is live this frame
    pub fn hit_enabled(&self) -> bool {
        self.phase == GamePhase::Playing && self.delivery.state == DeliveryState::Bowling
    }

    /// A swing right now would connect
    pub fn can_hit(&self) -> bool {
        self.hit_enabled() && self.delivery.sample.can_hit
    }

    /// Outcome to show while the ball is in flight
    pub fn hit_result(&self) -> Option<RunOutcome> {
        match self.delivery.state {
            DeliveryState::Hitting | DeliveryState::Result => self.delivery.outcome,
            _ => None,
        }
    }
}
