//! Grid Snake - a canvas snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food, levels)
//! - `engine`: Game engine and the timer-driven loop
//! - `renderer`: Drawing primitives and scene layout
//! - `platform`: Clock and input abstraction (browser + headless)
//! - `config`: Validated, serde-loadable game configuration

pub mod config;
pub mod engine;
pub mod error;
pub mod fps;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use engine::{GameEngine, GameLoop};
pub use error::{ConfigError, PlatformError};

/// Game configuration constants
pub mod consts {
    /// Side length of one grid cell in pixels
    pub const CELL_SIZE: i32 = 25;
    /// Pixel offset of the arena's top-left cell from the canvas edge
    pub const GRID_OFFSET: i32 = 4;
    /// Arena dimensions in cells
    pub const ARENA_COLUMNS: i32 = 15;
    pub const ARENA_ROWS: i32 = 16;

    /// Canvas dimensions (arena on the left, stats panel on the right)
    pub const CANVAS_WIDTH: i32 = 520;
    pub const CANVAS_HEIGHT: i32 = 408;

    /// Starting snake: laid out rightwards from the head, moving left
    pub const SNAKE_INITIAL_LENGTH: usize = 5;
    pub const SNAKE_INITIAL_ROW: i32 = 3;
    pub const SNAKE_INITIAL_COLUMN: i32 = 5;

    /// Score awarded per food eaten
    pub const POINTS_PER_FOOD: u64 = 1;

    pub const MAX_LEVEL: u8 = 9;

    /// Tick interval in ms, indexed by `level - 1`
    pub const TICK_INTERVAL_PER_LEVEL: [u32; MAX_LEVEL as usize] =
        [600, 550, 500, 450, 400, 350, 300, 250, 200];

    /// Cumulative score needed to reach a level, indexed by `level - 2`
    pub const SCORE_TO_LEVEL_UP: [u64; MAX_LEVEL as usize - 1] = [5, 11, 18, 26, 35, 45, 56, 68];

    /// Rejected random draws before food placement enumerates free cells
    pub const MAX_FOOD_ATTEMPTS: u32 = 1024;

    /// HUD layout (pixels). The divider sits one offset past the arena's
    /// right edge and the stats panel starts `PANEL_MARGIN` beyond it.
    pub const PANEL_MARGIN: i32 = 17;
    pub const FPS_TEXT_Y: i32 = 25;
    pub const LEVEL_TEXT_Y: i32 = 75;
    pub const SCORE_TEXT_Y: i32 = 100;
    pub const GAME_OVER_TEXT_POS: (i32, i32) = (140, 200);
    pub const PAUSED_TEXT_POS: (i32, i32) = (150, 200);

    pub const HUD_FONT: &str = "14px Arial";
    pub const BANNER_FONT: &str = "20px Arial";

    pub const BORDER_WIDTH: i32 = 5;
    pub const DIVIDER_WIDTH: i32 = 2;
    pub const CELL_BORDER_WIDTH: i32 = 2;
}
