//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell of movement per tick
//! - Randomness only through the caller's seeded RNG
//! - No rendering or platform dependencies

pub mod food;
pub mod state;
pub mod tick;

pub use food::place_food;
pub use state::{Direction, GameState, Level, Phase, Position};
pub use tick::{Collision, TickOutcome, advance, check_collision, tick};
