//! Obstacle Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};

    use obstacle_dash::consts::SPEED_STEP;
    use obstacle_dash::sim::{Game, GamePhase, TickInput, tick};
    use obstacle_dash::{HighScores, Hud, Run, SceneSnapshot, Settings};

    /// Browser app holding the game and its collaborators
    struct App {
        game: Game,
        hud: Hud,
        high_scores: HighScores,
        input: TickInput,
        /// Positions handed to the renderer after the last tick
        scene: Option<SceneSnapshot>,
        /// Run already recorded on the leaderboard
        recorded: bool,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            let game = Game::new(settings);
            let hud = Hud::new(&game);
            Self {
                game,
                hud,
                high_scores: HighScores::load(),
                input: TickInput::default(),
                scene: None,
                recorded: false,
            }
        }

        /// Run one simulation tick (one per animation frame)
        fn update(&mut self) {
            let input = self.input.clone();
            tick(&mut self.game, &input, &mut self.hud);

            // Clear one-shot inputs after processing
            self.input.jump = false;
            self.input.pause = false;

            if self.game.phase() == GamePhase::GameOver && !self.recorded {
                self.recorded = true;
                let run = Run {
                    score: self.game.state.score,
                    ticks: self.game.time_ticks,
                    timestamp: js_sys::Date::now(),
                };
                if self.high_scores.record(run).is_some() {
                    self.high_scores.save();
                }
            }

            self.scene = Some(SceneSnapshot::capture(&self.game));
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            // Pause menu follows the flag, which the control panel may flip
            if let Some(el) = document.get_element_by_id("pause-menu") {
                let class = if self.game.phase() == GamePhase::Paused { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("axes-toggle") {
                let label = if self.game.state.show_axes { "Axes: on" } else { "Axes: off" };
                el.set_text_content(Some(label));
            }
            if let Some(el) = document.get_element_by_id("speed-value") {
                el.set_text_content(Some(&format!("{:.2}", self.game.state.speed)));
            }

            if !self.hud.take_dirty() {
                return;
            }

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.hud.score_text));
            }
            if let Some(el) = document.query_selector("#hud-life .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.hud.life_text));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.hud.game_over_visible {
                    let _ = el.set_attribute("class", "");
                    if let (Some(score_el), Some(score)) =
                        (document.get_element_by_id("final-score"), self.hud.final_score)
                    {
                        score_el.set_text_content(Some(&score.to_string()));
                    }
                    if let (Some(best_el), Some(best)) =
                        (document.get_element_by_id("best-score"), self.high_scores.best())
                    {
                        best_el.set_text_content(Some(&best.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Reset game state for restart
        fn restart(&mut self) {
            self.game.restart();
            self.hud.reset(&self.game);
            self.input = TickInput {
                idle_mode: self.input.idle_mode,
                ..Default::default()
            };
            self.recorded = false;
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Obstacle Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let app = Rc::new(RefCell::new(App::new(Settings::load())));

        setup_input_handlers(app.clone());
        setup_restart_button(app.clone());
        setup_pause_menu(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Obstacle Dash running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(output) = window
            .document()
            .and_then(|d| d.get_element_by_id("output"))
        else {
            log::warn!("No #output element, pointer input disabled");
            return;
        };

        // Mouse click - jump
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.jump = true;
            });
            let _ = output
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - jump
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().input.jump = true;
            });
            let _ = output
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" => a.input.jump = true,
                    "Escape" | "p" | "P" => a.input.pause = true,
                    "a" | "A" => {
                        a.game.state.show_axes = !a.game.state.show_axes;
                        a.game.sync_settings().save();
                    }
                    "+" | "=" | "-" | "_" => {
                        let step = if matches!(event.key().as_str(), "-" | "_") {
                            -SPEED_STEP
                        } else {
                            SPEED_STEP
                        };
                        let speed = a.game.state.adjust_speed(step);
                        log::info!("Speed: {:.2}", speed);
                        a.game.sync_settings().save();
                    }
                    "i" | "I" => {
                        a.input.idle_mode = !a.input.idle_mode;
                        log::info!("Idle mode: {}", a.input.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.update();
            a.update_hud();
        }

        request_animation_frame(app);
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().restart();
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pause_menu(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Resume button
        if let Some(btn) = document.get_element_by_id("resume-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.pause = true; // Toggle back to running
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Upper bound on frames simulated by the headless demo (~5 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use obstacle_dash::highscores::HIGH_SCORES_FILE;
    use obstacle_dash::sim::{Game, GameEvent, GameObserver, TickInput, tick};
    use obstacle_dash::{HighScores, Hud, Run, SceneSnapshot, Settings};

    /// Forwards events to the HUD and logs them
    struct DemoObserver {
        hud: Hud,
    }

    impl GameObserver for DemoObserver {
        fn on_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::Jumped => log::trace!("jump"),
                GameEvent::ScoreChanged { .. } | GameEvent::LifeChanged { .. } => {
                    log::debug!("{:?}", event)
                }
                GameEvent::GameOver { score } => log::info!("Game over! Final score {}", score),
            }
            self.hud.on_event(event);
        }
    }

    env_logger::init();
    log::info!("Obstacle Dash (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = match &settings_path {
        Some(path) => match Settings::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let mut game = Game::new(settings);
    let mut observer = DemoObserver {
        hud: Hud::new(&game),
    };
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    while !game.state.game_over && game.time_ticks < DEMO_MAX_TICKS {
        tick(&mut game, &input, &mut observer);
    }

    let snapshot = SceneSnapshot::capture(&game);
    log::debug!("Final scene: {:?}", snapshot);

    // Scores live next to the settings file, or in the working directory
    let scores_path = settings_path
        .as_deref()
        .and_then(|p| p.parent())
        .map(|dir| dir.join(HIGH_SCORES_FILE))
        .unwrap_or_else(|| PathBuf::from(HIGH_SCORES_FILE));

    let mut high_scores = HighScores::load_from(&scores_path).unwrap_or_else(|e| {
        log::warn!("{}; starting an empty leaderboard", e);
        HighScores::default()
    });
    let run = Run {
        score: game.state.score,
        ticks: game.time_ticks,
        timestamp: std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0),
    };
    if high_scores.record(run).is_some() {
        if let Err(e) = high_scores.save_to(&scores_path) {
            log::warn!("Could not save high scores: {}", e);
        }
    }
    if let Some(best) = high_scores.best() {
        log::info!("Best run: score {} in {} frames", best.score, best.ticks);
    }

    println!(
        "{}  {}  ({} frames{})",
        observer.hud.score_text,
        observer.hud.life_text,
        game.time_ticks,
        if game.state.game_over { ", game over" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
