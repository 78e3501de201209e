//! Error types
//!
//! Gameplay has no error path: running into a wall or the snake itself is
//! `Phase::GameOver`. Errors only come from bad configuration or a missing
//! platform capability, and both surface at construction time.

use thiserror::Error;

/// Invalid game configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),

    #[error("grid offset must not be negative, got {0}")]
    NegativeOffset(i32),

    #[error("arena must have at least one cell, got {columns}x{rows}")]
    EmptyArena { columns: i32, rows: i32 },

    #[error("initial snake length must be at least 1")]
    InitialBodyTooShort,

    #[error("initial snake (row {row}, columns {first_column}..{last_column}) does not fit a {columns}x{rows} arena")]
    InitialBodyOutOfArena {
        row: i32,
        first_column: i32,
        last_column: i32,
        columns: i32,
        rows: i32,
    },

    #[error("arena of {cells} cells leaves no room for food next to a snake of length {length}")]
    NoRoomForFood { cells: i64, length: usize },

    #[error("arena ({arena_width}x{arena_height}px) does not fit the {canvas_width}x{canvas_height}px canvas")]
    ArenaExceedsCanvas {
        arena_width: i32,
        arena_height: i32,
        canvas_width: i32,
        canvas_height: i32,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Missing browser capability
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no canvas element with id '{0}'")]
    MissingCanvas(String),

    #[error("2D canvas context unavailable")]
    ContextUnavailable,

    #[error("JavaScript error: {0}")]
    Js(String),
}
