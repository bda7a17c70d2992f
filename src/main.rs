//! Cricket Over entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, PointerEvent};

    use cricket_over::Settings;
    use cricket_over::anim::{AnimationSample, ScenePose};
    use cricket_over::consts::*;
    use cricket_over::sim::{AutoBatter, GameEvent, GamePhase, GameState, TickInput, reset, tick};
    use cricket_over::ui::{HudSnapshot, Screen};

    // Page bindings: the 3D scene lives in page script and reads poses from here
    #[wasm_bindgen(inline_js = "
        export function publish_pose(json) {
            window.cricketPose = json;
            window.dispatchEvent(new CustomEvent('cricket-pose', { detail: json }));
        }

        export function read_settings() {
            const el = document.getElementById('game-settings');
            return el ? el.textContent : null;
        }
    ")]
    extern "C" {
        fn publish_pose(json: &str);
        fn read_settings() -> Option<String>;
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        batter: AutoBatter,
        input: TickInput,
        /// Simulation clock; real frame gaps capped at `MAX_FRAME_MS`
        sim_ms: f64,
        last_time: Option<f64>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        last_hud: Option<HudSnapshot>,
    }

    impl Game {
        fn new(settings: Settings, seed: u64) -> Self {
            Self {
                state: GameState::new(settings.tuning()),
                settings,
                batter: AutoBatter::new(seed),
                input: TickInput::default(),
                sim_ms: 0.0,
                last_time: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_hud: None,
            }
        }

        /// Run one simulation tick for this animation frame
        fn update(&mut self, time: f64) {
            let dt = self
                .last_time
                .map(|last| (time - last).clamp(0.0, MAX_FRAME_MS))
                .unwrap_or(0.0);
            self.last_time = Some(time);
            self.sim_ms += dt;

            let mut input = std::mem::take(&mut self.input);
            if self.settings.autoplay {
                input.hit |= self.batter.decide(&self.state);
            }

            // Presentation signals from what was drawn last frame
            let signals = AnimationSample::from_state(&self.state)
                .signals(&self.state.tuning.trajectory);
            input.ball_reached_bat = signals.ball_reached_bat;
            input.animation_complete = signals.animation_complete;

            tick(&mut self.state, &input, self.sim_ms);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::OverComplete { score } => log::info!("Over complete: {}", score),
                    other => log::debug!("{:?}", other),
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (59_000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Hand this frame's pose to the page
        fn render(&self) {
            let sample = AnimationSample::from_state(&self.state);
            let mut pose = ScenePose::from_sample(&sample, &self.state.tuning.trajectory);
            if self.settings.reduced_motion {
                pose.ball_spin = glam::Vec3::ZERO;
            }
            match serde_json::to_string(&pose) {
                Ok(json) => publish_pose(&json),
                Err(e) => log::warn!("Pose encode error: {}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if self.settings.show_fps {
                set_text(&document, "hud-fps", &self.fps.to_string());
            }

            let hud = HudSnapshot::from_state(&self.state);
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }

            set_text(&document, "hud-score", &hud.score.to_string());
            set_text(&document, "hud-balls", &hud.balls_remaining.to_string());
            for (i, faced) in hud.pips.iter().enumerate() {
                let class = if *faced { "pip faced" } else { "pip" };
                set_class(&document, &format!("pip-{i}"), class);
            }

            match hud.popup {
                Some(popup) => {
                    let motion = if self.settings.reduced_motion { " still" } else { "" };
                    set_class(
                        &document,
                        "run-popup",
                        &format!("run-popup {}{}", popup.tier.css_class(), motion),
                    );
                    set_text(&document, "run-value", &popup.runs.to_string());
                    set_text(&document, "run-shot", popup.shot);
                }
                None => set_class(&document, "run-popup", "run-popup hidden"),
            }

            let hit_class = if hud.hit_glowing {
                "hit-btn glow"
            } else if hud.hit_enabled {
                "hit-btn"
            } else {
                "hit-btn disabled"
            };
            set_class(&document, "hit-btn", hit_class);

            for id in ["start-screen", "out-screen", "over-screen"] {
                let class = if hud.screen.element_id() == Some(id) {
                    "overlay"
                } else {
                    "overlay hidden"
                };
                set_class(&document, id, class);
            }
            match hud.screen {
                Screen::Out { score, balls_faced } => {
                    set_text(&document, "out-score", &score.to_string());
                    set_text(&document, "out-balls", &balls_faced.to_string());
                }
                Screen::OverComplete { score, rating } => {
                    set_text(&document, "final-score", &score.to_string());
                    set_text(&document, "final-rating", rating);
                }
                Screen::Start | Screen::Batting => {}
            }

            self.last_hud = Some(hud);
        }

        /// Space/Enter does whatever the current screen offers
        fn primary_action(&mut self) {
            match self.state.phase {
                GamePhase::Start => self.input.start = true,
                GamePhase::Playing => self.input.hit = true,
                GamePhase::Out | GamePhase::GameOver => self.input.retry = true,
            }
        }

        /// Drop the match and any armed timers
        fn teardown(&mut self) {
            reset(&mut self.state);
            self.state.drain_events();
            self.input = TickInput::default();
            self.last_time = None;
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Settings embedded in the page, then `?preset=` on top
    fn load_settings(window: &web_sys::Window) -> Settings {
        let mut settings = match read_settings() {
            Some(json) => Settings::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Bad page settings: {}", e);
                Settings::default()
            }),
            None => Settings::default(),
        };

        if let Some(name) = window
            .location()
            .search()
            .ok()
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("preset"))
        {
            settings.apply_preset_name(&name);
        }
        settings
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cricket Over starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = load_settings(&window);
        let seed = js_sys::Date::now() as u64;
        log::info!(
            "Preset {} (autoplay {}, seed {})",
            settings.preset.as_str(),
            settings.autoplay,
            seed
        );
        let game = Rc::new(RefCell::new(Game::new(settings, seed)));

        setup_input_handlers(&window, &document, game.clone());
        setup_buttons(&document, game.clone());
        setup_visibility_reset(&document, game.clone());

        request_animation_frame(game);

        log::info!("Cricket Over running!");
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        document: &Document,
        game: Rc<RefCell<Game>>,
    ) {
        // Hit button (pointer covers mouse, touch and pen)
        if let Some(btn) = document.get_element_by_id("hit-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                game.borrow_mut().input.hit = true;
            });
            let _ = btn
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        g.primary_action();
                    }
                    "i" | "I" => {
                        g.settings.autoplay = !g.settings.autoplay;
                        log::info!("Autoplay: {}", g.settings.autoplay);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Out screen and over-complete screen both offer another go
        for id in ["retry-btn", "play-again-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    game.borrow_mut().input.retry = true;
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_visibility_reset(document: &Document, game: Rc<RefCell<Game>>) {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase != GamePhase::Start {
                    log::info!("Page hidden, resetting");
                }
                g.teardown();
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Headless over: autoplay batter on a simulated 60 Hz clock
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use cricket_over::Settings;
    use cricket_over::anim::AnimationSample;
    use cricket_over::consts::DEMO_FRAME_MS;
    use cricket_over::sim::{AutoBatter, GameEvent, GamePhase, GameState, TickInput, tick};
    use cricket_over::ui::{HudSnapshot, Screen};

    /// Hard stop in case a broken tuning never ends the over
    const MAX_FRAMES: u32 = 20_000;

    pub fn run(settings: &Settings, seed: u64) -> HudSnapshot {
        let mut state = GameState::new(settings.tuning());
        let mut batter = AutoBatter::new(seed);
        let mut now = 0.0;
        let mut input = TickInput {
            start: true,
            ..Default::default()
        };

        for _ in 0..MAX_FRAMES {
            input.hit = batter.decide(&state);
            let signals =
                AnimationSample::from_state(&state).signals(&state.tuning.trajectory);
            input.ball_reached_bat = signals.ball_reached_bat;
            input.animation_complete = signals.animation_complete;

            tick(&mut state, &input, now);
            input = TickInput::default();

            for event in state.drain_events() {
                log_event(&event, now);
            }
            if matches!(state.phase, GamePhase::Out | GamePhase::GameOver) {
                break;
            }
            now += DEMO_FRAME_MS;
        }

        let hud = HudSnapshot::from_state(&state);
        match hud.screen {
            Screen::Out { score, balls_faced } => {
                log::info!("OUT! {} runs off {} balls", score, balls_faced)
            }
            Screen::OverComplete { score, rating } => {
                log::info!("{} {} runs off the over", rating, score)
            }
            Screen::Start | Screen::Batting => log::warn!("Demo stopped mid-over"),
        }
        hud
    }

    fn log_event(event: &GameEvent, now: f64) {
        let t = now / 1000.0;
        match event {
            GameEvent::DeliveryStarted { ball } => log::info!("[{t:6.2}s] Ball {ball}"),
            GameEvent::Swing { outcome, timing } => match timing {
                Some(timing) => log::info!("[{t:6.2}s] Swing at {timing:.2}: {outcome}"),
                None => log::info!("[{t:6.2}s] Swing: {outcome}"),
            },
            GameEvent::Dismissed { ball, how } => {
                log::info!("[{t:6.2}s] Ball {ball}: out ({how:?})")
            }
            other => log::debug!("[{t:6.2}s] {other:?}"),
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Cricket Over (native demo) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => load_settings(&path),
        None => cricket_over::Settings::default(),
    };
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Preset {}, seed {}", settings.preset.as_str(), seed);

    demo::run(&settings, seed);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings(path: &str) -> cricket_over::Settings {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Can't read {}: {}", path, e);
            return cricket_over::Settings::default();
        }
    };
    cricket_over::Settings::from_json(&json).unwrap_or_else(|e| {
        log::error!("Bad settings in {}: {}", path, e);
        cricket_over::Settings::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
