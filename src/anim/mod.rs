//! Presentation sampling
//!
//! Renderers never touch `GameState` directly. Each frame they take one
//! [`AnimationSample`] and feed it to the pure pose functions in [`ball`] and
//! [`rigs`]. The only thing that flows back is the pair of presentation
//! signals (ball reached the bat, hit animation complete), which the host
//! turns into `TickInput` flags.

pub mod ball;
pub mod rigs;

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::sim::{DeliveryState, GamePhase, GameState, RunOutcome, TickInput};
use crate::tuning::Trajectory;

pub use rigs::{BatsmanPose, BowlerPose};

/// What the ball is doing, as far as a renderer cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    /// In the bowler's hand at the top of the run-up
    Idle,
    /// Run-up, release and travel down the pitch
    Bowling,
    /// Off the bat
    Hit,
    /// Heading into the stumps
    Out,
}

/// Read-only snapshot of everything the presentation layer animates from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSample {
    pub phase: GamePhase,
    pub delivery_state: DeliveryState,
    pub ball: BallPhase,
    pub bowling_progress: f32,
    pub is_swinging: bool,
    pub swing_progress: f32,
    /// Hit flight progress; 0 until the ball is struck
    pub flight_progress: f32,
    pub hit_result: Option<RunOutcome>,
    pub is_out: bool,
    pub score: u32,
    pub balls_remaining: u8,
}

impl AnimationSample {
    pub fn from_state(state: &GameState) -> Self {
        let delivery = &state.delivery;
        let ball = if state.phase == GamePhase::Start {
            BallPhase::Idle
        } else if delivery.is_in_flight() {
            BallPhase::Hit
        } else {
            match delivery.state {
                DeliveryState::Out => BallPhase::Out,
                DeliveryState::Bowling => BallPhase::Bowling,
                _ => BallPhase::Idle,
            }
        };

        Self {
            phase: state.phase,
            delivery_state: delivery.state,
            ball,
            bowling_progress: delivery.progress,
            is_swinging: delivery.is_swinging,
            swing_progress: delivery.swing_progress,
            flight_progress: delivery.flight_progress,
            hit_result: if ball == BallPhase::Hit {
                delivery.outcome
            } else {
                None
            },
            is_out: state.match_state.is_out,
            score: state.match_state.score,
            balls_remaining: state.match_state.balls_remaining,
        }
    }

    /// Bowler animates through the delivery and holds the follow-through on a wicket
    pub fn is_bowling(&self) -> bool {
        matches!(
            self.delivery_state,
            DeliveryState::Bowling | DeliveryState::Out
        ) && self.phase != GamePhase::Start
    }

    /// Presentation-side completion signals for this frame
    pub fn signals(&self, trajectory: &Trajectory) -> TickInput {
        TickInput {
            ball_reached_bat: ball::reached_bat(self, trajectory),
            animation_complete: ball::flight_complete(self, trajectory),
            ..Default::default()
        }
    }
}

/// Position plus Euler rotation (XYZ order, radians)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn new(translation: Vec3, rotation: Vec3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Vec3::ZERO,
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Every animated value for one frame, ready to hand to a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePose {
    pub ball: Vec3,
    pub ball_spin: Vec3,
    pub batsman: BatsmanPose,
    pub bowler: BowlerPose,
    pub bails_fallen: bool,
}

impl ScenePose {
    pub fn from_sample(sample: &AnimationSample, trajectory: &Trajectory) -> Self {
        Self {
            ball: ball::position(sample, trajectory),
            ball_spin: ball::spin_rate(sample, trajectory),
            batsman: rigs::batsman(sample),
            bowler: rigs::bowler(sample, trajectory),
            bails_fallen: rigs::bails_fallen(sample),
        }
    }
}
