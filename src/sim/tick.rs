//! Per-tick state transition
//!
//! One call moves the snake one cell: steer, check walls and body, then eat
//! or slide. `tick` mutates in place; `advance` is the same transition as a
//! pure function returning the next state.

use rand::Rng;

use super::food::place_food;
use super::state::{Direction, GameState, Phase, Position};
use crate::config::GameConfig;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the arena
    Wall,
    /// Head ran into the body
    Body,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing happened
    Idle,
    /// Slid one cell
    Moved,
    /// Ate food and grew
    Ate { leveled_up: bool },
    /// Run ended on a collision
    Crashed(Collision),
    /// Ate the last food; the body fills the arena
    BoardFull,
}

/// Advance the game state by one tick, in place
pub fn tick<R: Rng>(
    state: &mut GameState,
    input: Option<Direction>,
    config: &GameConfig,
    rng: &mut R,
) -> TickOutcome {
    if state.phase != Phase::Running {
        return TickOutcome::Idle;
    }

    if let Some(dir) = input {
        if !dir.is_reverse_of(state.direction) {
            state.direction = dir;
        }
    }

    let new_head = state.head() + state.direction.vector() * config.cell_size;

    if let Some(collision) = check_collision(state, new_head, config) {
        state.phase = Phase::GameOver;
        return TickOutcome::Crashed(collision);
    }

    if state.food == Some(new_head) {
        state.body.push_front(new_head);
        state.score += config.points_per_food;
        state.foods_eaten += 1;
        let leveled_up = level_up(state);

        state.food = place_food(config, &state.body, Some(new_head), rng);
        if state.food.is_none() {
            state.phase = Phase::GameOver;
            return TickOutcome::BoardFull;
        }
        return TickOutcome::Ate { leveled_up };
    }

    state.body.pop_back();
    state.body.push_front(new_head);
    TickOutcome::Moved
}

/// Pure form of [`tick`]: returns the next state, leaving `state` untouched
pub fn advance<R: Rng>(
    state: &GameState,
    input: Option<Direction>,
    config: &GameConfig,
    rng: &mut R,
) -> GameState {
    let mut next = state.clone();
    tick(&mut next, input, config, rng);
    next
}

/// Check whether moving the head to `new_head` ends the run.
///
/// The tail leaves its cell this tick unless food is eaten, so it is only a
/// valid landing spot when the snake is not about to grow.
pub fn check_collision(
    state: &GameState,
    new_head: Position,
    config: &GameConfig,
) -> Option<Collision> {
    if !config.in_bounds(new_head) {
        return Some(Collision::Wall);
    }

    let grows = state.food == Some(new_head);
    let checked = if grows {
        state.body.len()
    } else {
        state.body.len() - 1
    };

    if state.body.iter().take(checked).any(|&segment| segment == new_head) {
        Some(Collision::Body)
    } else {
        None
    }
}

/// Raise the level by one if the score reached the next threshold
fn level_up(state: &mut GameState) -> bool {
    match state.level.next() {
        Some(next) if state.score >= next.score_threshold() => {
            state.level = next;
            state.tick_interval_ms = next.tick_interval_ms();
            true
        }
        _ => false,
    }
}
