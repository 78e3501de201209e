//! Grid Snake entry point
//!
//! Handles platform-specific initialization and starts the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::error::Error;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    use grid_snake::error::PlatformError;
    use grid_snake::platform::InputEvent;
    use grid_snake::platform::web::{TimeoutClock, listen_keyboard};
    use grid_snake::renderer::CanvasRenderer;
    use grid_snake::{GameConfig, GameEngine, GameLoop};

    const CANVAS_ID: &str = "canvas";

    pub fn run() -> Result<(), Box<dyn Error>> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Grid Snake starting...");

        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| PlatformError::MissingCanvas(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| PlatformError::MissingCanvas(CANVAS_ID.to_string()))?;

        // Optional overrides in <canvas data-config='{...}'>
        let config = match canvas.get_attribute("data-config") {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::default(),
        };

        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);

        let renderer = CanvasRenderer::new(&canvas)?;
        let seed = js_sys::Date::now() as u64;
        let engine = GameEngine::new(config, renderer, seed)?;
        let clock = Rc::new(TimeoutClock::new()?);
        let game = GameLoop::new(engine, clock);

        let input = game.clone();
        listen_keyboard(&window, move |event| input.dispatch(event))?;

        game.dispatch(InputEvent::Start);
        log::info!("Grid Snake running! S = start, P = pause, arrows = steer");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: a greedy autopilot plays one game against the virtual clock
/// and the result is logged.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::rc::Rc;

    use grid_snake::platform::{FrameClock, InputEvent, ManualClock};
    use grid_snake::renderer::RecordingRenderer;
    use grid_snake::sim::Phase;
    use grid_snake::{GameConfig, GameEngine, GameLoop};

    const MAX_TICKS: u32 = 100_000;

    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    let seed = rand::random::<u64>();
    let clock = Rc::new(ManualClock::new());
    let engine = GameEngine::new(config, RecordingRenderer::new(), seed)?;
    let game = GameLoop::new(engine, clock.clone());

    game.dispatch(InputEvent::Start);
    for _ in 0..MAX_TICKS {
        if game.engine().phase() != Phase::Running {
            break;
        }

        let turn = autopilot::steer(&*game.engine());
        if let Some(event) = turn {
            game.dispatch(event);
        }
        // Keep the recorder from growing without bound
        game.engine_mut().renderer_mut().clear_calls();
        if !clock.fire_next() {
            break;
        }
    }

    let engine = game.engine();
    log::info!(
        "Finished after {:.1}s of game time: score {}, level {}, length {}",
        clock.now_ms() / 1000.0,
        engine.state().score,
        engine.state().level.get(),
        engine.state().len()
    );
    println!("{}", serde_json::to_string_pretty(engine.state())?);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use grid_snake::GameEngine;
    use grid_snake::platform::InputEvent;
    use grid_snake::renderer::Renderer;
    use grid_snake::sim::{Direction, check_collision};

    const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Pick the safe move that gets closest to the food, if turning helps
    pub fn steer<R: Renderer>(engine: &GameEngine<R>) -> Option<InputEvent> {
        let state = engine.state();
        let config = engine.config();
        let food = state.food?;

        let best = ALL
            .into_iter()
            .filter(|dir| !dir.is_reverse_of(state.direction))
            .filter(|dir| {
                let next = state.head() + dir.vector() * config.cell_size;
                check_collision(state, next, config).is_none()
            })
            .min_by_key(|dir| {
                let next = state.head() + dir.vector() * config.cell_size;
                let d = (food - next).abs();
                d.x + d.y
            })?;

        (best != state.direction).then_some(match best {
            Direction::Left => InputEvent::MoveLeft,
            Direction::Right => InputEvent::MoveRight,
            Direction::Up => InputEvent::MoveUp,
            Direction::Down => InputEvent::MoveDown,
        })
    }
}
