//! 2D rendering module
//!
//! The game draws through the `Renderer` trait: a handful of integer-pixel
//! primitives with no logic of their own. `scene` lays out frames on top of
//! it; backends only translate calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use recorder::{DrawCall, RecordingRenderer};

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Brown,
    White,
    Red,
    Yellow,
}

impl Color {
    /// CSS color string
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Brown => "brown",
            Color::White => "white",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }
}

/// Drawing surface. Coordinates are integer pixels; nothing is returned and
/// in-bounds calls must not fail.
pub trait Renderer {
    /// Clear a `width` x `height` area from the origin
    fn clear(&mut self, width: i32, height: i32);

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, line_width: i32);

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, line_width: i32);

    /// Left-aligned text with its baseline at `y`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &str, color: Color);
}
