//! HUD and result screen data
//!
//! Everything the page shows, derived from `GameState` in one place so the
//! DOM code only copies strings and toggles classes.

use serde::Serialize;

use crate::consts::BALLS_PER_OVER;
use crate::sim::{GamePhase, GameState, RunOutcome};

/// Shot name shown under the run popup, indexed by runs
const SHOT_NAMES: [&str; 7] = [
    "Miss",
    "Defensive Push",
    "Flick Shot",
    "Drive",
    "Cover Drive",
    "Pull Shot",
    "SIX!",
];

pub fn shot_name(outcome: RunOutcome) -> &'static str {
    SHOT_NAMES
        .get(usize::from(outcome.runs()))
        .copied()
        .unwrap_or(SHOT_NAMES[0])
}

/// Popup styling bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunTier {
    Six,
    Boundary,
    Runs,
    Single,
    Dot,
}

impl RunTier {
    pub fn of(outcome: RunOutcome) -> Self {
        match outcome.runs() {
            6 => RunTier::Six,
            4 => RunTier::Boundary,
            2.. => RunTier::Runs,
            1 => RunTier::Single,
            0 => RunTier::Dot,
        }
    }

    /// CSS class for the popup
    pub fn css_class(&self) -> &'static str {
        match self {
            RunTier::Six => "run-six",
            RunTier::Boundary => "run-four",
            RunTier::Runs => "run-runs",
            RunTier::Single => "run-single",
            RunTier::Dot => "run-dot",
        }
    }
}

/// End-of-over headline
pub fn rating(score: u32) -> &'static str {
    match score {
        30.. => "INCREDIBLE!",
        24.. => "EXCELLENT!",
        18.. => "GREAT!",
        12.. => "GOOD!",
        6.. => "NICE TRY!",
        _ => "KEEP PRACTICING!",
    }
}

/// Which overlay is up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Start,
    Batting,
    Out { score: u32, balls_faced: u8 },
    OverComplete { score: u32, rating: &'static str },
}

impl Screen {
    /// DOM id of the overlay, `None` while batting
    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            Screen::Start => Some("start-screen"),
            Screen::Batting => None,
            Screen::Out { .. } => Some("out-screen"),
            Screen::OverComplete { .. } => Some("over-screen"),
        }
    }
}

/// Run popup for the ball in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunPopup {
    pub runs: u8,
    pub shot: &'static str,
    pub tier: RunTier,
}

impl RunPopup {
    pub fn new(outcome: RunOutcome) -> Self {
        Self {
            runs: outcome.runs(),
            shot: shot_name(outcome),
            tier: RunTier::of(outcome),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub balls_remaining: u8,
    /// One per ball of the over; `true` once that ball has been faced
    pub pips: [bool; BALLS_PER_OVER as usize],
    pub popup: Option<RunPopup>,
    /// Hit button accepts input
    pub hit_enabled: bool,
    /// Ball is inside the hit window
    pub hit_glowing: bool,
    pub screen: Screen,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let match_state = &state.match_state;
        let faced = usize::from(match_state.balls_faced());

        let mut pips = [false; BALLS_PER_OVER as usize];
        for pip in pips.iter_mut().take(faced) {
            *pip = true;
        }

        let popup = state
            .delivery
            .is_in_flight()
            .then_some(state.delivery.outcome)
            .flatten()
            .map(RunPopup::new);

        let live = state.hit_enabled() && !state.delivery.swung;

        let screen = match state.phase {
            GamePhase::Start => Screen::Start,
            GamePhase::Playing => Screen::Batting,
            GamePhase::Out => Screen::Out {
                score: match_state.score,
                balls_faced: match_state.balls_faced(),
            },
            GamePhase::GameOver => Screen::OverComplete {
                score: match_state.score,
                rating: rating(match_state.score),
            },
        };

        Self {
            score: match_state.score,
            balls_remaining: match_state.balls_remaining,
            pips,
            popup,
            hit_enabled: live,
            hit_glowing: live && state.can_hit(),
            screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    fn runs(n: u8) -> RunOutcome {
        RunOutcome::new(n).unwrap()
    }

    #[test]
    fn test_shot_names() {
        assert_eq!(shot_name(runs(0)), "Miss");
        assert_eq!(shot_name(runs(1)), "Defensive Push");
        assert_eq!(shot_name(runs(4)), "Cover Drive");
        assert_eq!(shot_name(RunOutcome::SIX), "SIX!");
    }

    #[test]
    fn test_run_tiers() {
        assert_eq!(RunTier::of(runs(6)), RunTier::Six);
        assert_eq!(RunTier::of(runs(4)), RunTier::Boundary);
        assert_eq!(RunTier::of(runs(3)), RunTier::Runs);
        assert_eq!(RunTier::of(runs(2)), RunTier::Runs);
        assert_eq!(RunTier::of(runs(1)), RunTier::Single);
        assert_eq!(RunTier::of(runs(0)), RunTier::Dot);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating(36), "INCREDIBLE!");
        assert_eq!(rating(30), "INCREDIBLE!");
        assert_eq!(rating(29), "EXCELLENT!");
        assert_eq!(rating(18), "GREAT!");
        assert_eq!(rating(12), "GOOD!");
        assert_eq!(rating(6), "NICE TRY!");
        assert_eq!(rating(5), "KEEP PRACTICING!");
        assert_eq!(rating(0), "KEEP PRACTICING!");
    }

    #[test]
    fn test_hud_on_start_screen() {
        let hud = HudSnapshot::from_state(&GameState::default());
        assert_eq!(hud.screen, Screen::Start);
        assert_eq!(hud.pips, [false; 6]);
        assert_eq!(hud.balls_remaining, 6);
        assert!(!hud.hit_enabled);
        assert!(hud.popup.is_none());
    }

    #[test]
    fn test_hud_tracks_delivery() {
        let mut state = GameState::default();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, 0.0);
        tick(&mut state, &TickInput::default(), 800.0);

        // Early in the delivery: live but not glowing
        tick(&mut state, &TickInput::default(), 800.0 + 500.0);
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.screen, Screen::Batting);
        assert!(hud.hit_enabled);
        assert!(!hud.hit_glowing);

        // Centre of the window
        tick(&mut state, &TickInput::default(), 800.0 + 1670.0);
        assert!(HudSnapshot::from_state(&state).hit_glowing);

        let hit = TickInput {
            hit: true,
            ..Default::default()
        };
        tick(&mut state, &hit, 800.0 + 1680.0);
        let hud = HudSnapshot::from_state(&state);
        assert!(!hud.hit_enabled);
        assert_eq!(hud.popup, Some(RunPopup::new(RunOutcome::SIX)));
        assert_eq!(hud.popup.map(|p| p.shot), Some("SIX!"));

        let done = TickInput {
            animation_complete: true,
            ..Default::default()
        };
        tick(&mut state, &done, 800.0 + 3500.0);
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.score, 6);
        assert_eq!(hud.pips, [true, false, false, false, false, false]);
    }

    #[test]
    fn test_out_screen_reports_balls_faced() {
        let mut state = GameState::default();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, 0.0);
        tick(&mut state, &TickInput::default(), 800.0);
        // No swing: bowled at the end of the delivery
        tick(&mut state, &TickInput::default(), 800.0 + 2000.0);
        tick(&mut state, &TickInput::default(), 800.0 + 2000.0 + 1300.0);

        let hud = HudSnapshot::from_state(&state);
        assert_eq!(
            hud.screen,
            Screen::Out {
                score: 0,
                balls_faced: 1
            }
        );
        assert_eq!(hud.screen.element_id(), Some("out-screen"));
    }
}
