//! Frame layout: arena, snake, food and the stats panel

use super::{Color, Renderer};
use crate::config::GameConfig;
use crate::consts::*;
use crate::sim::{GameState, Phase, Position};

/// Draw whatever the current phase shows
pub fn draw<R: Renderer + ?Sized>(r: &mut R, state: &GameState, config: &GameConfig, fps: u32) {
    match state.phase {
        Phase::Running => draw_frame(r, state, config, fps),
        Phase::Paused => draw_paused(r),
        Phase::GameOver => draw_game_over(r),
    }
}

/// Full gameplay frame
pub fn draw_frame<R: Renderer + ?Sized>(
    r: &mut R,
    state: &GameState,
    config: &GameConfig,
    fps: u32,
) {
    r.clear(config.canvas_width, config.canvas_height);
    draw_background(r, config);

    let panel_x = divider_x(config) + PANEL_MARGIN;
    r.draw_text(&format!("FPS: {fps}"), panel_x, FPS_TEXT_Y, HUD_FONT, Color::White);

    for &segment in &state.body {
        draw_cell(r, segment, config.cell_size, Color::Red);
    }
    if let Some(food) = state.food {
        draw_cell(r, food, config.cell_size, Color::Yellow);
    }

    r.draw_text(
        &format!("Level: {}", state.level.get()),
        panel_x,
        LEVEL_TEXT_Y,
        HUD_FONT,
        Color::White,
    );
    r.draw_text(
        &format!("Score: {}", state.score),
        panel_x,
        SCORE_TEXT_Y,
        HUD_FONT,
        Color::White,
    );
}

/// Banner drawn over the last frame when the run ends
pub fn draw_game_over<R: Renderer + ?Sized>(r: &mut R) {
    let (x, y) = GAME_OVER_TEXT_POS;
    r.draw_text("Game Over!", x, y, BANNER_FONT, Color::White);
}

/// Banner drawn over the last frame while paused
pub fn draw_paused<R: Renderer + ?Sized>(r: &mut R) {
    let (x, y) = PAUSED_TEXT_POS;
    r.draw_text("Paused", x, y, BANNER_FONT, Color::White);
}

/// X of the line separating the arena from the stats panel
pub fn divider_x(config: &GameConfig) -> i32 {
    config.offset * 2 + config.columns * config.cell_size
}

fn draw_background<R: Renderer + ?Sized>(r: &mut R, config: &GameConfig) {
    let (w, h) = (config.canvas_width, config.canvas_height);
    r.fill_rect(0, 0, w, h, Color::Black);
    r.stroke_rect(0, 0, w, h, Color::Brown, BORDER_WIDTH);

    let x = divider_x(config);
    r.draw_line(x, 0, x, h, Color::Brown, DIVIDER_WIDTH);
}

fn draw_cell<R: Renderer + ?Sized>(r: &mut R, pos: Position, size: i32, fill: Color) {
    r.stroke_rect(pos.x, pos.y, size, size, Color::White, CELL_BORDER_WIDTH);
    r.fill_rect(pos.x, pos.y, size, size, fill);
}
