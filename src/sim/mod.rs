//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - Time only enters through the `now_ms` passed to `tick`
//! - Delayed transitions go through the cancellable scheduler
//! - Presentation reads state; it never writes it

pub mod autoplay;
pub mod clock;
pub mod outcome;
pub mod over;
pub mod schedule;
pub mod state;
pub mod tick;
pub mod timing;

pub use autoplay::AutoBatter;
pub use clock::ProgressClock;
pub use outcome::{InvalidRuns, RunOutcome, RunThresholds, deviation, resolve};
pub use over::{MatchState, OverStatus};
pub use schedule::{ScheduledAction, Scheduler};
pub use state::{Delivery, DeliveryState, Dismissal, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, attempt_hit, reset, start_game, tick};
pub use timing::{HitWindow, TimingSample};
