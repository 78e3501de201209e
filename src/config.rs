//! Game configuration
//!
//! Defaults reproduce the classic layout. A JSON document may override any
//! subset of fields; everything is validated before a game is built from it.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Position;

/// Grid geometry and starting layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one cell in pixels
    pub cell_size: i32,
    /// Pixel offset of cell (0, 0) from the canvas origin
    pub offset: i32,
    /// Arena width in cells
    pub columns: i32,
    /// Arena height in cells
    pub rows: i32,
    /// Canvas size in pixels (arena plus stats panel)
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Starting body length
    pub initial_length: usize,
    /// Row of the starting body
    pub initial_row: i32,
    /// Column of the starting head; the body extends to the right
    pub initial_column: i32,
    /// Score awarded per food eaten
    pub points_per_food: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            offset: GRID_OFFSET,
            columns: ARENA_COLUMNS,
            rows: ARENA_ROWS,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            initial_length: SNAKE_INITIAL_LENGTH,
            initial_row: SNAKE_INITIAL_ROW,
            initial_column: SNAKE_INITIAL_COLUMN,
            points_per_food: POINTS_PER_FOOD,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the geometry is playable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        if self.offset < 0 {
            return Err(ConfigError::NegativeOffset(self.offset));
        }
        if self.columns <= 0 || self.rows <= 0 {
            return Err(ConfigError::EmptyArena {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::InitialBodyTooShort);
        }

        let last_column = self.initial_column as i64 + self.initial_length as i64 - 1;
        if self.initial_row < 0
            || self.initial_row >= self.rows
            || self.initial_column < 0
            || last_column >= self.columns as i64
        {
            return Err(ConfigError::InitialBodyOutOfArena {
                row: self.initial_row,
                first_column: self.initial_column,
                last_column: last_column as i32,
                columns: self.columns,
                rows: self.rows,
            });
        }

        if self.cell_count() <= self.initial_length as i64 {
            return Err(ConfigError::NoRoomForFood {
                cells: self.cell_count(),
                length: self.initial_length,
            });
        }

        let right = self.offset as i64 + self.columns as i64 * self.cell_size as i64;
        let bottom = self.offset as i64 + self.rows as i64 * self.cell_size as i64;
        if right > self.canvas_width as i64 || bottom > self.canvas_height as i64 {
            return Err(ConfigError::ArenaExceedsCanvas {
                arena_width: right as i32,
                arena_height: bottom as i32,
                canvas_width: self.canvas_width,
                canvas_height: self.canvas_height,
            });
        }

        Ok(())
    }

    /// Number of cells in the arena
    pub fn cell_count(&self) -> i64 {
        self.columns as i64 * self.rows as i64
    }

    /// Pixel position of the cell at (column, row)
    #[inline]
    pub fn cell_position(&self, column: i32, row: i32) -> Position {
        Position::new(
            self.offset + column * self.cell_size,
            self.offset + row * self.cell_size,
        )
    }

    /// Whether a pixel position lies inside the arena
    pub fn in_bounds(&self, pos: Position) -> bool {
        let right = self.offset + self.columns * self.cell_size;
        let bottom = self.offset + self.rows * self.cell_size;
        pos.x >= self.offset && pos.x < right && pos.y >= self.offset && pos.y < bottom
    }

    /// Whether a pixel position sits exactly on a cell corner
    pub fn is_aligned(&self, pos: Position) -> bool {
        (pos.x - self.offset).rem_euclid(self.cell_size) == 0
            && (pos.y - self.offset).rem_euclid(self.cell_size) == 0
    }
}
