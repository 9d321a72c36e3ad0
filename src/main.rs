//! Tank Artillery entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Terrain shape for a new round
const START_Y: f32 = 700.0;
const END_Y: f32 = 650.0;
const TERRAIN_POINTS: usize = 24;

/// Demo volley fired when no shells are in flight (input binding lives in the host page)
const VOLLEY_SIZE: usize = 3;

fn volley<R: rand::Rng>(rng: &mut R, width: f32) -> Vec<tank_artillery::sim::Shell> {
    use glam::Vec2;
    use tank_artillery::sim::Shell;

    (0..VOLLEY_SIZE)
        .map(|_| {
            let x = rng.random_range(0.1f32..0.9) * width;
            let vel = Vec2::new(
                rng.random_range(-150.0f32..150.0),
                rng.random_range(-250.0f32..-50.0),
            );
            Shell::fired(Vec2::new(x, 100.0), vel)
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use tank_artillery::WorldConfig;
    use tank_artillery::consts::SKY_COLOR;
    use tank_artillery::renderer::{draw_shell, draw_terrain};
    use tank_artillery::sim::{LogCrater, World};

    use super::{END_Y, START_Y, TERRAIN_POINTS, volley};

    /// Game instance holding all state
    struct Game {
        world: World,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        crater: LogCrater,
        rng: Pcg32,
    }

    impl Game {
        /// Run one simulation frame
        fn update(&mut self, time: f64) {
            if self.world.shells.is_empty() {
                let width = self.world.config.playfield_width();
                for shell in volley(&mut self.rng, width) {
                    self.world.fire(shell);
                }
            }

            let report = self.world.frame(time, &mut self.crater);
            if report.skipped > 0 {
                log::warn!("{} malformed shells skipped this frame", report.skipped);
            }

            self.sync_canvas_size();
        }

        /// Match the canvas to the accepted playfield size (rejected resizes never reach it)
        fn sync_canvas_size(&self) {
            let (width, height) = self.world.config.pixel_size();
            if self.canvas.width() != width || self.canvas.height() != height {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let config = &self.world.config;
            self.ctx.set_fill_style_str(SKY_COLOR);
            self.ctx
                .fill_rect(0.0, 0.0, config.width as f64, config.height as f64);

            draw_terrain(&mut self.ctx, &self.world.terrain, config);
            for shell in &self.world.shells {
                draw_shell(&mut self.ctx, shell);
            }
        }
    }

    fn window_size(window: &web_sys::Window) -> (f32, f32) {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w as f32, h as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tank Artillery starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = window_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let config = WorldConfig::default()
            .resized(width, height)
            .unwrap_or_default();
        let seed = js_sys::Date::now() as u64;
        let world = World::new(config, seed, START_Y, END_Y, TERRAIN_POINTS)
            .expect("default world config is valid");

        let game = Rc::new(RefCell::new(Game {
            world,
            canvas,
            ctx,
            crater: LogCrater,
            rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
        }));

        setup_resize_handler(game.clone());

        request_animation_frame(game);

        log::info!("Tank Artillery running!");
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                let (w, h) = window_size(&window);
                game.borrow_mut().world.request_resize(w, h);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use tank_artillery::WorldConfig;
    use tank_artillery::sim::{RecordCrater, World};

    env_logger::init();
    log::info!("Tank Artillery (native) starting...");
    log::info!("Native mode runs a headless volley - build for wasm32 to play in the browser");

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345);

    let config = WorldConfig::default();
    let mut world = match World::new(config, seed, START_Y, END_Y, TERRAIN_POINTS) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Cannot start round: {e}");
            std::process::exit(1);
        }
    };

    let mut rng = Pcg32::seed_from_u64(seed.wrapping_add(1));
    for shell in volley(&mut rng, config.playfield_width()) {
        world.fire(shell);
    }

    let mut craters = RecordCrater::new();
    let mut culled = 0;
    let dt = config.frame_budget_secs();
    while !world.shells.is_empty() && world.frame_count < 10_000 {
        culled += world.step(dt, &mut craters).culled;
    }

    println!(
        "Seed {seed}: {} impacts, {culled} shells left the playfield after {} frames",
        craters.events.len(),
        world.frame_count
    );
    for event in craters.drain() {
        println!(
            "  crater at ({:.1}, {:.1}) on segment {}",
            event.shell_pos.x, event.shell_pos.y, event.segment.index
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
