//! Beneath Surface entry point
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

    use beneath_surface::audio::AudioManager;
    use beneath_surface::consts::*;
    use beneath_surface::renderer::{build_scene, RenderState};
    use beneath_surface::sim::{campaign, tick, GameEvent, GameState, TickInput, World};
    use beneath_surface::Settings;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_music_volume(settings.effective_music_volume());

            let state = GameState::new(campaign(), seed)
                .expect("static campaign failed validation");

            Self {
                state,
                render_state: None,
                audio,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Run simulation ticks off the frame accumulator.
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                let events = tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.switch_world = false;
                self.input.any_key = false;

                self.handle_events(&events);
            }
        }

        /// Relay tick outcomes to the audio collaborator.
        fn handle_events(&mut self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::Started => {
                        self.audio.resume();
                        self.audio.play_both_looping();
                        self.audio.set_world_volumes(0.5, 0.0);
                        log::info!("Session started");
                    }
                    GameEvent::WorldFlipped(world) => match world {
                        World::Surface => self.audio.set_world_volumes(0.5, 0.0),
                        World::Beneath => self.audio.set_world_volumes(0.0, 0.5),
                    },
                    GameEvent::LevelAdvanced(index) => {
                        log::info!("Level {} - {}", index + 1, self.state.level().name);
                    }
                    GameEvent::Completed => {
                        log::info!("Campaign complete");
                    }
                    GameEvent::SwitchActivated | GameEvent::Respawned => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let shake_scale = if self.settings.effective_screen_shake() {
                1.0
            } else {
                0.0
            };
            let scene = build_scene(&self.state, shake_scale);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&scene) {
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
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-level") {
                el.set_text_content(Some(&format!("LEVEL: {}", self.state.level_index + 1)));
            }
            if let Some(el) = document.get_element_by_id("hud-world") {
                el.set_text_content(Some(&format!("REALITY: {}", self.state.world.as_str())));
            }
            if let Some(el) = document.get_element_by_id("hud-switches") {
                let level = self.state.level();
                el.set_text_content(Some(&format!(
                    "DATA: {}/{}",
                    level.switches_activated, level.required_switches
                )));
            }

            // The start overlay goes away for good once the session is live.
            if let Some(el) = document.get_element_by_id("start-overlay") {
                let class = if self.state.started { "hidden" } else { "" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("complete-overlay") {
                let class = if self.state.complete { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Beneath Surface starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

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

        setup_input_handlers(&window, game.clone());
        setup_blur_mute(&window, game.clone());

        request_animation_frame(game);

        log::info!("Beneath Surface running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Keydown: held movement keys, plus the switch-world and start edges.
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                g.input.any_key = true;
                match event.key().as_str() {
                    "ArrowRight" | "d" | "D" => g.input.right = true,
                    "ArrowLeft" | "a" | "A" => g.input.left = true,
                    "ArrowUp" | "w" | "W" | " " => g.input.jump = true,
                    "e" | "E" | "Shift" => g.input.switch_world = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: release held keys.
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" | "d" | "D" => g.input.right = false,
                    "ArrowLeft" | "a" | "A" => g.input.left = false,
                    "ArrowUp" | "w" | "W" | " " => g.input.jump = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_blur_mute(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                    g.audio.set_world_volumes(0.0, 0.0);
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.audio.set_muted(false);
                match g.state.world {
                    World::Surface => g.audio.set_world_volumes(0.5, 0.0),
                    World::Beneath => g.audio.set_world_volumes(0.0, 0.5),
                }
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
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

            g.update(dt);
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
    log::info!("Beneath Surface (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a short scripted session and log what happened. Doubles as a smoke
/// test that the campaign is playable from the spawn point.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use beneath_surface::sim::{campaign, tick, GameState, TickInput};

    let mut state = GameState::new(campaign(), 0).expect("static campaign failed validation");

    // Wake the session, then hold right with periodic hops for ten seconds.
    let mut events = tick(&mut state, &TickInput {
        any_key: true,
        ..TickInput::default()
    });
    for step in 0..600u32 {
        let input = TickInput {
            right: true,
            jump: step % 90 == 0,
            switch_world: step == 300,
            ..TickInput::default()
        };
        events.extend(tick(&mut state, &input));
    }

    for event in &events {
        log::info!("event: {:?}", event);
    }
    log::info!(
        "after {} ticks: pos=({:.1}, {:.1}) world={:?} level={} grounded={}",
        state.time_ticks,
        state.player.pos.x,
        state.player.pos.y,
        state.world,
        state.level_index + 1,
        state.player.grounded,
    );
}
