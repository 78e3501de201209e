//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`. Randomness is
//! passed in by the caller so the state itself stays plain data.

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;
use serde::Serialize;

use super::food::place_food;
use crate::config::GameConfig;
use crate::consts::*;

/// Pixel coordinates of a cell's top-left corner
pub type Position = IVec2;

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step in screen space (y grows downwards)
    pub fn vector(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True if turning from `current` to `self` would be a 180° reversal
    pub fn is_reverse_of(self, current: Direction) -> bool {
        self == current.opposite()
    }
}

/// Difficulty level, always within `1..=MAX_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const FIRST: Level = Level(1);
    pub const MAX: Level = Level(MAX_LEVEL);

    pub fn new(level: u8) -> Option<Self> {
        (1..=MAX_LEVEL).contains(&level).then_some(Level(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The following level, or `None` at the cap
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Tick interval while playing at this level
    pub fn tick_interval_ms(self) -> u32 {
        TICK_INTERVAL_PER_LEVEL[self.0 as usize - 1]
    }

    /// Cumulative score needed to reach this level
    pub fn score_threshold(self) -> u64 {
        match self.0 {
            1 => 0,
            n => SCORE_TO_LEVEL_UP[n as usize - 2],
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Snake is moving
    Running,
    /// Frozen until un-paused
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// Complete state of one life
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Body segments, head first
    pub body: VecDeque<Position>,
    pub direction: Direction,
    /// Current food; `None` only once the body fills the arena
    pub food: Option<Position>,
    pub level: Level,
    pub score: u64,
    pub tick_interval_ms: u32,
    pub phase: Phase,
    /// Food eaten during this life
    pub foods_eaten: u64,
}

impl GameState {
    /// Fresh state: the starting body heading left and one food placed.
    ///
    /// `config` must already be validated.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let body: VecDeque<Position> = (0..config.initial_length as i32)
            .map(|i| config.cell_position(config.initial_column + i, config.initial_row))
            .collect();
        let food = place_food(config, &body, None, rng);

        Self {
            body,
            direction: Direction::Left,
            food,
            level: Level::FIRST,
            score: 0,
            tick_interval_ms: Level::FIRST.tick_interval_ms(),
            phase: if food.is_some() {
                Phase::Running
            } else {
                Phase::GameOver
            },
            foods_eaten: 0,
        }
    }

    #[inline]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    #[inline]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether any body segment covers `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}
