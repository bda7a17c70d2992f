//! Frame-driven state machine tick
//!
//! Core game loop. Each frame the host calls [`tick`] with its input flags and
//! a monotonic timestamp. Input is applied first, against the window sample
//! computed on the previous frame, then due timers fire, then clocks advance.

use super::clock::ProgressClock;
use super::outcome::{RunOutcome, resolve_sample};
use super::over::{MatchState, OverStatus};
use super::schedule::ScheduledAction;
use super::state::{Delivery, DeliveryState, Dismissal, GameEvent, GamePhase, GameState};
use super::timing::TimingSample;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// "Start game" on the title screen
    pub start: bool,
    /// "Attempt hit"
    pub hit: bool,
    /// "Play again" on the out / over complete screens
    pub retry: bool,
    /// Presentation: ball reached the batting zone
    pub ball_reached_bat: bool,
    /// Presentation: hit animation finished
    pub animation_complete: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    state.now_ms = now_ms;

    if input.retry {
        retry(state);
    }
    if input.start {
        start_game(state, now_ms);
    }
    if input.hit {
        attempt_hit(state, now_ms);
    }
    if input.ball_reached_bat {
        ball_reached_bat(state);
    }
    if input.animation_complete {
        animation_complete(state, now_ms);
    }

    run_due_timers(state, now_ms);
    advance_clocks(state, now_ms);
}

/// Start -> Playing. No-op from any other phase.
pub fn start_game(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::Start {
        log::debug!("Ignoring start in {:?}", state.phase);
        return;
    }
    state.now_ms = now_ms;
    state.scheduler.cancel_all();
    state.match_state = MatchState::new();
    state.delivery = Delivery::new(1);
    state.set_phase(GamePhase::Playing);
    state.emit(GameEvent::GameStarted);
    log::info!("Game started ({} balls)", state.match_state.balls_remaining);

    let delay = state.tuning.first_ball_delay_ms;
    state.schedule(delay, ScheduledAction::StartBowling);
}

/// Out / GameOver -> Start. No-op while an over is in progress.
pub fn retry(state: &mut GameState) {
    match state.phase {
        GamePhase::Out | GamePhase::GameOver => reset(state),
        phase => log::debug!("Ignoring retry in {:?}", phase),
    }
}

/// Tear down the current match from any phase.
///
/// Cancels every pending delayed transition so nothing armed before the
/// reset can touch the new match.
pub fn reset(state: &mut GameState) {
    state.scheduler.cancel_all();
    state.match_state = MatchState::new();
    state.delivery = Delivery::new(1);
    state.set_phase(GamePhase::Start);
    state.emit(GameEvent::Reset);
    log::info!("Game reset (generation {})", state.generation());
}

/// Player swing. Only the first swing of a bowling delivery counts.
pub fn attempt_hit(state: &mut GameState, now_ms: f64) {
    if !state.hit_enabled() {
        log::debug!(
            "Ignoring hit in {:?}/{:?}",
            state.phase,
            state.delivery.state
        );
        return;
    }
    if state.delivery.swung {
        log::debug!("Ignoring second hit on ball {}", state.delivery.number);
        return;
    }
    state.delivery.swung = true;

    // Resolve against the last computed sample, not a fresh one
    let sample = state.delivery.sample;
    let outcome = resolve_sample(&sample, &state.tuning.thresholds);

    if !sample.can_hit {
        let how = if state.delivery.progress < state.tuning.hit_window.start {
            Dismissal::Early
        } else {
            Dismissal::Late
        };
        log::debug!(
            "Swing outside window at progress {:.3}",
            state.delivery.progress
        );
        dismiss(state, how);
        return;
    }

    let delivery = &mut state.delivery;
    delivery.outcome = Some(outcome);
    delivery.state = DeliveryState::Hitting;
    delivery.is_swinging = true;
    delivery.swing_progress = 0.0;
    delivery.swing = Some(ProgressClock::start(now_ms, state.tuning.swing_duration_ms));
    delivery.hit_started_ms = Some(now_ms);
    delivery.flight_progress = 0.0;
    if outcome.is_dismissal() {
        delivery.dismissal = Some(Dismissal::Edged);
    }

    log::debug!(
        "Ball {}: swing timing {:?} -> {} runs",
        delivery.number,
        sample.timing,
        outcome
    );
    state.emit(GameEvent::Swing {
        outcome,
        timing: sample.timing,
    });
}

/// Informational signal from the presentation layer
pub fn ball_reached_bat(state: &mut GameState) {
    if state.delivery.state != DeliveryState::Bowling || state.delivery.reached_bat {
        return;
    }
    state.delivery.reached_bat = true;
    state.emit(GameEvent::BallReachedBat);
}

/// Hit animation finished: count the delivery and move the over on.
///
/// Counting waits for this signal, not for the outcome being resolved.
pub fn animation_complete(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let delivery = &state.delivery;
    let in_flight = matches!(
        delivery.state,
        DeliveryState::Hitting | DeliveryState::Result
    );
    let Some(outcome) = delivery.outcome else {
        return;
    };
    if !in_flight || delivery.counted {
        return;
    }
    state.now_ms = now_ms;
    state.delivery.counted = true;

    let ball = state.delivery.number;
    let status = state.match_state.apply_outcome(outcome);
    state.emit(GameEvent::DeliveryCompleted {
        ball,
        outcome,
        status,
    });
    log::info!(
        "Ball {}: {} runs (score {}, {} left)",
        ball,
        outcome,
        state.match_state.score,
        state.match_state.balls_remaining
    );

    match status {
        OverStatus::Continue => {
            let delay = state.tuning.result_display_ms;
            state.schedule(delay, ScheduledAction::NextBall);
        }
        OverStatus::Completed => {
            let score = state.match_state.score;
            state.emit(GameEvent::OverComplete { score });
            log::info!("Over complete: {} runs", score);
            let delay = state.tuning.result_display_ms;
            state.schedule(delay, ScheduledAction::EnterGameOverPhase);
        }
        OverStatus::Dismissed => {
            end_delivery_out(state, Dismissal::Edged);
        }
    }
}

/// Wicket without the ball being hit (bowled, or swing outside the window).
///
/// There is no hit animation to wait for, so the ball is counted here.
fn dismiss(state: &mut GameState, how: Dismissal) {
    let ball = state.delivery.number;
    state.delivery.outcome = Some(RunOutcome::OUT);
    state.delivery.counted = true;
    let status = state.match_state.apply_outcome(RunOutcome::OUT);
    state.emit(GameEvent::DeliveryCompleted {
        ball,
        outcome: RunOutcome::OUT,
        status,
    });
    end_delivery_out(state, how);
}

fn end_delivery_out(state: &mut GameState, how: Dismissal) {
    let delivery = &mut state.delivery;
    delivery.state = DeliveryState::Out;
    delivery.dismissal = Some(how);
    delivery.sample = TimingSample::CLOSED;
    let ball = delivery.number;

    log::info!(
        "OUT {:?} on ball {} (score {})",
        how,
        ball,
        state.match_state.score
    );
    state.emit(GameEvent::Dismissed { ball, how });
    let delay = state.tuning.out_display_ms;
    state.schedule(delay, ScheduledAction::EnterOutPhase);
}

fn run_due_timers(state: &mut GameState, now_ms: f64) {
    while let Some(action) = state.scheduler.pop_due(now_ms) {
        apply_scheduled(state, action, now_ms);
    }
}

fn apply_scheduled(state: &mut GameState, action: ScheduledAction, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        log::debug!("Dropping {:?} in {:?}", action, state.phase);
        return;
    }
    match action {
        ScheduledAction::StartBowling => {
            if state.delivery.state != DeliveryState::Idle {
                return;
            }
            let delivery = &mut state.delivery;
            delivery.state = DeliveryState::Bowling;
            delivery.bowling = Some(ProgressClock::start(
                now_ms,
                state.tuning.bowling_duration_ms,
            ));
            delivery.progress = 0.0;
            delivery.sample = state.tuning.hit_window.evaluate(0.0);
            let ball = delivery.number;
            log::debug!("Ball {} bowling", ball);
            state.emit(GameEvent::DeliveryStarted { ball });
        }
        ScheduledAction::NextBall => {
            let next = state.delivery.number + 1;
            state.delivery = Delivery::new(next);
            let delay = state.tuning.next_ball_delay_ms;
            state.schedule(delay, ScheduledAction::StartBowling);
        }
        ScheduledAction::EnterOutPhase => state.set_phase(GamePhase::Out),
        ScheduledAction::EnterGameOverPhase => state.set_phase(GamePhase::GameOver),
    }
}

fn advance_clocks(state: &mut GameState, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    match state.delivery.state {
        DeliveryState::Bowling => {
            let Some(clock) = state.delivery.bowling else {
                return;
            };
            // Never runs backwards within a delivery
            let progress = clock.progress(now_ms).max(state.delivery.progress);
            state.delivery.progress = progress;
            state.delivery.sample = state.tuning.hit_window.evaluate(progress);

            if progress >= 1.0 {
                dismiss(state, Dismissal::Bowled);
            }
        }
        DeliveryState::Hitting => {
            if let Some(swing) = state.delivery.swing {
                if swing.is_complete(now_ms) {
                    let delivery = &mut state.delivery;
                    delivery.is_swinging = false;
                    delivery.swing_progress = 0.0;
                    delivery.state = DeliveryState::Result;
                    state.emit(GameEvent::SwingFinished);
                } else {
                    state.delivery.swing_progress = swing.progress(now_ms);
                }
            }
        }
        DeliveryState::Idle | DeliveryState::Result | DeliveryState::Out => {}
    }

    if let Some(started) = state.delivery.hit_started_ms {
        let secs = ((now_ms - started).max(0.0) / 1000.0) as f32;
        state.delivery.flight_progress = secs * state.tuning.trajectory.flight_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{Tuning, TuningPreset};

    const FRAME: f64 = 1000.0 / 60.0;

    /// Drive frames until `cond` holds (or give up after `max_ms`)
    fn run_until(
        state: &mut GameState,
        now: &mut f64,
        max_ms: f64,
        cond: impl Fn(&GameState) -> bool,
    ) -> bool {
        let end = *now + max_ms;
        while *now < end {
            if cond(state) {
                return true;
            }
            *now += FRAME;
            tick(state, &TickInput::default(), *now);
        }
        cond(state)
    }

    fn started() -> (GameState, f64) {
        let mut state = GameState::new(TuningPreset::Standard.tuning());
        let mut now = 0.0;
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
            now,
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(run_until(&mut state, &mut now, 2000.0, |s| {
            s.delivery.state == DeliveryState::Bowling
        }));
        (state, now)
    }

    /// Put the current delivery at an exact bowling progress
    fn bowl_to(state: &mut GameState, progress: f32) -> f64 {
        let clock = state.delivery.bowling.unwrap();
        let now = clock.start_ms() + f64::from(progress) * clock.duration_ms();
        tick(state, &TickInput::default(), now);
        now
    }

    fn hit(state: &mut GameState, now: f64) {
        tick(
            state,
            &TickInput {
                hit: true,
                ..Default::default()
            },
            now,
        );
    }

    fn complete_animation(state: &mut GameState, now: f64) {
        tick(
            state,
            &TickInput {
                animation_complete: true,
                ..Default::default()
            },
            now,
        );
    }

    #[test]
    fn test_first_ball_after_delay() {
        let mut state = GameState::default();
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
            0.0,
        );
        tick(&mut state, &TickInput::default(), 799.0);
        assert_eq!(state.delivery.state, DeliveryState::Idle);
        tick(&mut state, &TickInput::default(), 800.0);
        assert_eq!(state.delivery.state, DeliveryState::Bowling);
        assert!(state.hit_enabled());
    }

    #[test]
    fn test_perfect_timing_scores_six() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.835);
        assert!(state.can_hit());
        hit(&mut state, now + 1.0);

        assert_eq!(state.delivery.state, DeliveryState::Hitting);
        assert_eq!(state.delivery.outcome, Some(RunOutcome::SIX));
        assert!(state.delivery.is_swinging);
        // Not counted until the hit animation reports back
        assert_eq!(state.match_state.score, 0);
        assert_eq!(state.match_state.balls_remaining, 6);

        complete_animation(&mut state, now + 1500.0);
        assert_eq!(state.match_state.score, 6);
        assert_eq!(state.match_state.balls_remaining, 5);
        assert!(!state.match_state.is_out);
    }

    #[test]
    fn test_swing_before_window_is_out() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.70);
        assert!(!state.can_hit());
        hit(&mut state, now);

        assert_eq!(state.delivery.state, DeliveryState::Out);
        assert_eq!(state.delivery.outcome, Some(RunOutcome::OUT));
        assert_eq!(state.delivery.dismissal, Some(Dismissal::Early));
        assert!(state.match_state.is_out);

        tick(&mut state, &TickInput::default(), now + 1199.0);
        assert_eq!(state.phase, GamePhase::Playing);
        tick(&mut state, &TickInput::default(), now + 1200.0);
        assert_eq!(state.phase, GamePhase::Out);
    }

    #[test]
    fn test_no_swing_is_bowled() {
        let (mut state, mut now) = started();
        assert!(run_until(&mut state, &mut now, 3000.0, |s| {
            s.delivery.state == DeliveryState::Out
        }));
        assert_eq!(state.delivery.progress, 1.0);
        assert_eq!(state.delivery.dismissal, Some(Dismissal::Bowled));
        assert_eq!(state.delivery.outcome, Some(RunOutcome::OUT));
        assert!(state.match_state.is_out);
        assert_eq!(state.match_state.balls_remaining, 5);
        assert!(run_until(&mut state, &mut now, 2000.0, |s| {
            s.phase == GamePhase::Out
        }));
    }

    #[test]
    fn test_last_ball_boundary_ends_over() {
        let (mut state, _) = started();
        state.match_state = MatchState {
            score: 20,
            balls_remaining: 1,
            is_out: false,
        };
        // deviation 0.2 -> four
        let w = state.tuning.hit_window;
        let now = bowl_to(&mut state, w.start + w.width() * 0.4);
        hit(&mut state, now);
        assert_eq!(state.delivery.outcome.map(|o| o.runs()), Some(4));

        complete_animation(&mut state, now + 1500.0);
        assert_eq!(
            state.match_state,
            MatchState {
                score: 24,
                balls_remaining: 0,
                is_out: false
            }
        );
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::OverComplete { score: 24 })
        );
        tick(&mut state, &TickInput::default(), now + 1500.0 + 1200.0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_second_hit_is_ignored() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.835);
        hit(&mut state, now);
        let first = state.delivery.clone();
        let totals = state.match_state;

        hit(&mut state, now + 5.0);
        assert_eq!(state.delivery.outcome, first.outcome);
        assert_eq!(state.delivery.swing, first.swing);
        assert_eq!(state.match_state, totals);

        complete_animation(&mut state, now + 1500.0);
        let after = state.match_state;
        // Repeated completion signal does not count the ball twice
        complete_animation(&mut state, now + 1510.0);
        hit(&mut state, now + 1520.0);
        assert_eq!(state.match_state, after);
    }

    #[test]
    fn test_hit_outside_bowling_is_ignored() {
        let mut state = GameState::default();
        hit(&mut state, 0.0);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.events.is_empty());

        tick(
            &mut state,
            &TickInput {
                start: true,
                hit: true,
                ..Default::default()
            },
            0.0,
        );
        // Idle: the swing is a no-op and does not burn the latch
        assert_eq!(state.delivery.state, DeliveryState::Idle);
        assert!(!state.delivery.swung);
    }

    #[test]
    fn test_hit_uses_previous_frame_sample() {
        let (mut state, _) = started();
        // Last tick leaves the ball just short of the window
        let now = bowl_to(&mut state, 0.74);
        assert!(!state.delivery.sample.can_hit);
        // The swing arrives in a frame whose own time is inside the window
        let clock = state.delivery.bowling.unwrap();
        let later = clock.start_ms() + 0.80 * clock.duration_ms();
        assert!(later > now);
        hit(&mut state, later);
        assert_eq!(state.delivery.dismissal, Some(Dismissal::Early));
    }

    #[test]
    fn test_swing_then_result_then_next_ball() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.80);
        hit(&mut state, now);
        tick(&mut state, &TickInput::default(), now + 100.0);
        assert!((state.delivery.swing_progress - 0.5).abs() < 1e-3);
        tick(&mut state, &TickInput::default(), now + 200.0);
        assert_eq!(state.delivery.state, DeliveryState::Result);
        assert!(!state.delivery.is_swinging);
        assert_eq!(state.delivery.swing_progress, 0.0);

        let done = now + 1800.0;
        complete_animation(&mut state, done);
        assert_eq!(state.match_state.balls_remaining, 5);
        tick(&mut state, &TickInput::default(), done + 1200.0);
        assert_eq!(state.delivery.state, DeliveryState::Idle);
        assert_eq!(state.delivery.number, 2);
        assert!(!state.delivery.swung);
        tick(&mut state, &TickInput::default(), done + 2001.0);
        assert_eq!(state.delivery.state, DeliveryState::Bowling);
    }

    #[test]
    fn test_edge_of_window_is_caught_after_swing() {
        let (mut state, _) = started();
        // Window start: timing 0 -> deviation 1 -> no runs
        let now = bowl_to(&mut state, 0.75);
        hit(&mut state, now);
        assert_eq!(state.delivery.state, DeliveryState::Hitting);
        assert_eq!(state.delivery.outcome, Some(RunOutcome::OUT));
        assert!(!state.match_state.is_out);

        complete_animation(&mut state, now + 1500.0);
        assert!(state.match_state.is_out);
        assert_eq!(state.delivery.state, DeliveryState::Out);
        assert_eq!(state.delivery.dismissal, Some(Dismissal::Edged));
        tick(&mut state, &TickInput::default(), now + 1500.0 + 1200.0);
        assert_eq!(state.phase, GamePhase::Out);
    }

    #[test]
    fn test_reset_cancels_pending_timers() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.835);
        hit(&mut state, now);
        complete_animation(&mut state, now + 1500.0);
        // NextBall is armed
        assert_eq!(state.pending_timers(), 1);
        let generation = state.generation();

        reset(&mut state);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.pending_timers(), 0);
        assert_ne!(state.generation(), generation);

        let fresh = state.match_state;
        let delivery = state.delivery.clone();
        for i in 1..=300 {
            tick(&mut state, &TickInput::default(), now + 1500.0 + f64::from(i) * FRAME);
        }
        assert_eq!(state.match_state, fresh);
        assert_eq!(state.delivery, delivery);
        assert_eq!(state.phase, GamePhase::Start);
    }

    #[test]
    fn test_reset_then_restart_ignores_old_timers() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.60);
        hit(&mut state, now);
        // EnterOutPhase armed for now + 1200
        reset(&mut state);
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
            now + 10.0,
        );
        tick(&mut state, &TickInput::default(), now + 1300.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.match_state.is_out);
    }

    #[test]
    fn test_retry_only_from_terminal_phases() {
        let (mut state, _) = started();
        let now = state.now_ms;
        tick(
            &mut state,
            &TickInput {
                retry: true,
                ..Default::default()
            },
            now,
        );
        assert_eq!(state.phase, GamePhase::Playing);

        state.set_phase(GamePhase::GameOver);
        let now = state.now_ms;
        tick(
            &mut state,
            &TickInput {
                retry: true,
                ..Default::default()
            },
            now,
        );
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.match_state, MatchState::new());
    }

    #[test]
    fn test_ball_reached_bat_latches() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.9);
        let signal = TickInput {
            ball_reached_bat: true,
            ..Default::default()
        };
        state.drain_events();
        tick(&mut state, &signal, now);
        tick(&mut state, &signal, now + FRAME);
        let reached = state
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::BallReachedBat)
            .count();
        assert_eq!(reached, 1);
        assert!(state.delivery.reached_bat);
    }

    #[test]
    fn test_full_over_of_sixes() {
        let mut state = GameState::new(Tuning::default());
        let mut now = 0.0;
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
            now,
        );
        for ball in 1..=6u8 {
            assert!(run_until(&mut state, &mut now, 3000.0, |s| {
                s.delivery.state == DeliveryState::Bowling
            }));
            assert_eq!(state.delivery.number, ball);
            now = bowl_to(&mut state, 0.835);
            hit(&mut state, now);
            now += 1800.0;
            complete_animation(&mut state, now);
        }
        assert_eq!(state.match_state.score, 36);
        assert!(run_until(&mut state, &mut now, 2000.0, |s| {
            s.phase == GamePhase::GameOver
        }));
    }

    #[test]
    fn test_progress_is_monotonic() {
        let (mut state, _) = started();
        let mid = bowl_to(&mut state, 0.5);
        // Host clock jitter backwards
        tick(&mut state, &TickInput::default(), mid - 50.0);
        assert!(state.delivery.progress >= 0.5);
    }

    #[test]
    fn test_swing_after_window_is_out() {
        let (mut state, _) = started();
        let now = bowl_to(&mut state, 0.95);
        assert!(!state.can_hit());
        hit(&mut state, now);

        assert_eq!(state.delivery.state, DeliveryState::Out);
        assert_eq!(state.delivery.dismissal, Some(Dismissal::Late));
        assert_eq!(state.delivery.outcome, Some(RunOutcome::OUT));
        assert!(state.match_state.is_out);
        assert_eq!(state.match_state.balls_remaining, 5);
        assert_eq!(state.match_state.score, 0);

        tick(&mut state, &TickInput::default(), now + 1200.0);
        assert_eq!(state.phase, GamePhase::Out);
    }

    #[test]
    fn test_classic_preset_delivery() {
        let mut state = GameState::new(TuningPreset::Classic.tuning());
        let mut now = 0.0;
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
            now,
        );
        assert!(run_until(&mut state, &mut now, 2000.0, |s| {
            s.delivery.state == DeliveryState::Bowling
        }));

        // 0.72 is inside the classic window but before the standard one opens
        let early = bowl_to(&mut state, 0.72);
        assert!(state.can_hit());

        let w = state.tuning.hit_window;
        let centre = bowl_to(&mut state, w.midpoint());
        assert!(centre > early);
        hit(&mut state, centre);
        assert_eq!(state.delivery.outcome, Some(RunOutcome::SIX));

        complete_animation(&mut state, centre + 1800.0);
        assert_eq!(state.match_state.score, 6);
        assert_eq!(state.match_state.balls_remaining, 5);

        // Second ball: late swing past the classic window end
        now = centre + 1800.0;
        assert!(run_until(&mut state, &mut now, 3000.0, |s| {
            s.delivery.number == 2 && s.delivery.state == DeliveryState::Bowling
        }));
        let late = bowl_to(&mut state, 0.93);
        hit(&mut state, late);
        assert_eq!(state.delivery.dismissal, Some(Dismissal::Late));
        assert_eq!(state.match_state.balls_remaining, 4);
        assert!(state.match_state.is_out);
    }
}
