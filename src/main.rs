//! Pixel Invaders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use pixel_invaders::audio::AudioManager;
    use pixel_invaders::consts::*;
    use pixel_invaders::renderer::{RenderState, shapes};
    use pixel_invaders::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use pixel_invaders::{HighScore, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, high_score: u32, settings: Settings) -> Self {
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            audio.set_muted(settings.muted);

            Self {
                state: GameState::new(seed, high_score),
                render_state: None,
                audio,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks, then hand this tick's events to the
        /// collaborators (audio cues, high-score persistence)
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            for event in self.state.take_events() {
                if event == GameEvent::GameOver {
                    HighScore {
                        value: self.state.high_score,
                    }
                    .save();
                }
                self.audio.play(event.into());
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document
                .query_selector("#hud-highscore .hud-value")
                .ok()
                .flatten()
            {
                el.set_text_content(Some(&self.state.high_score.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-lives .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.lives.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    if let Some(val) = document.query_selector("#hud-fps .hud-value").ok().flatten()
                    {
                        val.set_text_content(Some(&self.fps.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Title screen overlay
            if let Some(el) = document.get_element_by_id("title-screen") {
                if self.state.phase == GamePhase::Title {
                    let _ = el.set_attribute("class", "");
                    if let Some(hs) = document.get_element_by_id("title-highscore") {
                        hs.set_text_content(Some(&format!(
                            "HIGH SCORE: {}",
                            self.state.high_score
                        )));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Game over overlay
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el
                            .set_text_content(Some(&format!("FINAL SCORE: {}", self.state.score)));
                    }
                    if let Some(banner) = document.get_element_by_id("new-high-score") {
                        if self.state.score == self.state.high_score {
                            let _ = banner.set_attribute("class", "");
                        } else {
                            let _ = banner.set_attribute("class", "hidden");
                        }
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pixel Invaders starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game with the persisted high score
        let settings = Settings::load();
        let high_score = HighScore::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, high_score.value, settings)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Pixel Invaders running!");
    }

    /// Keyboard listeners maintain the held-key snapshot the simulation
    /// reads each tick. The sim edge-detects the start key itself.
    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                // Browsers require a user gesture before audio can start
                g.audio.resume();
                match event.code().as_str() {
                    "ArrowLeft" | "KeyA" => g.input.left = true,
                    "ArrowRight" | "KeyD" => g.input.right = true,
                    "Space" | "KeyJ" => g.input.fire = true,
                    "Enter" => g.input.start = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "ArrowLeft" | "KeyA" => g.input.left = false,
                    "ArrowRight" | "KeyD" => g.input.right = false,
                    "Space" | "KeyJ" => g.input.fire = false,
                    "Enter" => g.input.start = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pixel Invaders (native) starting...");
    log::info!("Native mode is headless - build for wasm32 for the playable version");

    println!("\nRunning smoke simulation...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use pixel_invaders::consts::SIM_DT;
    use pixel_invaders::sim::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(0xC0FFEE, 0);
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, SIM_DT);
    assert_eq!(state.phase, GamePhase::Playing);

    // Drift right while holding fire for ten seconds of game time
    let input = TickInput {
        right: true,
        fire: true,
        ..Default::default()
    };
    for _ in 0..1200 {
        tick(&mut state, &input, SIM_DT);
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    println!(
        "✓ Smoke run finished: score {}, {} invaders remaining",
        state.score,
        state.alive_invaders()
    );
}
