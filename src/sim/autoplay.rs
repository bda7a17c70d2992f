//! Idle/demo mode batter
//!
//! Picks a swing point around the hit window for each delivery from a seeded
//! RNG, so a demo over replays identically for the same seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;

/// How far past each window edge the batter may misjudge (progress units)
const MISJUDGE_MARGIN: f32 = 0.04;

/// Automatic batter driving `TickInput::hit`
#[derive(Debug, Clone)]
pub struct AutoBatter {
    rng: Pcg32,
    /// (scheduler generation, ball number, progress to swing at)
    target: Option<(u64, u8, f32)>,
}

impl AutoBatter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            target: None,
        }
    }

    /// Progress this batter will swing at on the current delivery, if chosen
    pub fn target(&self) -> Option<f32> {
        self.target.map(|(_, _, t)| t)
    }

    /// True on the frame the batter swings
    pub fn decide(&mut self, state: &GameState) -> bool {
        if !state.hit_enabled() || state.delivery.swung {
            return false;
        }

        let key = (state.generation(), state.delivery.number);
        let target = match self.target {
            Some((generation, ball, t)) if (generation, ball) == key => t,
            _ => {
                let window = state.tuning.hit_window;
                let reach = window.width() * 0.5 + MISJUDGE_MARGIN;
                let t = window.midpoint() + self.rng.random_range(-reach..=reach);
                log::debug!("Autoplay: ball {} swing at {:.3}", key.1, t);
                self.target = Some((key.0, key.1, t));
                t
            }
        };

        state.delivery.progress >= target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{DeliveryState, GamePhase, TickInput, tick};

    /// Play a whole over, reporting the hit animation done after a fixed delay
    fn play(seed: u64) -> GameState {
        let mut state = GameState::default();
        let mut batter = AutoBatter::new(seed);
        let mut now = 0.0;
        let mut input = TickInput {
            start: true,
            ..Default::default()
        };
        let mut hit_at = None;

        for _ in 0..10_000 {
            input.hit = batter.decide(&state);
            tick(&mut state, &input, now);
            input = TickInput::default();

            if state.delivery.state == DeliveryState::Hitting && hit_at.is_none() {
                hit_at = Some(now);
            }
            if let Some(t) = hit_at {
                if now - t >= 1800.0 {
                    input.animation_complete = true;
                    hit_at = None;
                }
            }
            if matches!(state.phase, GamePhase::Out | GamePhase::GameOver) {
                break;
            }
            now += 1000.0 / 60.0;
        }
        state
    }

    #[test]
    fn over_always_finishes() {
        for seed in [1, 7, 42, 1234] {
            let state = play(seed);
            assert!(
                matches!(state.phase, GamePhase::Out | GamePhase::GameOver),
                "seed {seed} stuck in {:?}",
                state.phase
            );
            assert!(state.match_state.is_finished());
        }
    }

    #[test]
    fn same_seed_same_innings() {
        let a = play(99);
        let b = play(99);
        assert_eq!(a.match_state, b.match_state);
        assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn targets_stay_near_window() {
        let state = {
            let mut s = GameState::default();
            tick(
                &mut s,
                &TickInput {
                    start: true,
                    ..Default::default()
                },
                0.0,
            );
            tick(&mut s, &TickInput::default(), 800.0);
            s
        };
        let window = state.tuning.hit_window;
        for seed in 0..50 {
            let mut batter = AutoBatter::new(seed);
            assert!(!batter.decide(&state));
            let t = batter.target().unwrap();
            assert!(t >= window.start - MISJUDGE_MARGIN - 1e-6);
            assert!(t <= window.end + MISJUDGE_MARGIN + 1e-6);
        }
    }
}
