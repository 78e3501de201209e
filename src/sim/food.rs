//! Food placement

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::Position;
use crate::config::GameConfig;
use crate::consts::MAX_FOOD_ATTEMPTS;

/// Pick a cell for the next food, uniformly over cells that are neither on
/// the body nor equal to `previous`.
///
/// Draws random cells and rejects blocked ones. After `MAX_FOOD_ATTEMPTS`
/// rejections the free cells are enumerated and one is chosen directly, so
/// a crowded board still terminates. Returns `None` when no cell is free.
pub fn place_food<R: Rng>(
    config: &GameConfig,
    body: &VecDeque<Position>,
    previous: Option<Position>,
    rng: &mut R,
) -> Option<Position> {
    let blocked = |pos: Position| previous == Some(pos) || body.contains(&pos);

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let column = rng.random_range(0..config.columns);
        let row = rng.random_range(0..config.rows);
        let pos = config.cell_position(column, row);
        if !blocked(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..config.rows)
        .flat_map(|row| (0..config.columns).map(move |column| config.cell_position(column, row)))
        .filter(|&pos| !blocked(pos))
        .collect();

    if free.is_empty() {
        log::warn!("No free cell left for food");
    } else {
        log::debug!("Food placement fell back to {} free cells", free.len());
    }

    free.choose(rng).copied()
}
