//! Renderer that records calls instead of drawing
//!
//! Used by the headless build and by tests to inspect what a frame drew.

use super::{Color, Renderer};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear {
        width: i32,
        height: i32,
    },
    FillRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    StrokeRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        line_width: i32,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        line_width: i32,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        font: String,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Every text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of filled rectangles of one color
    pub fn fill_count(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillRect { color: c, .. } if *c == color))
            .count()
    }

    /// Number of frames started (clears)
    pub fn frame_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Clear { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, width: i32, height: i32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, line_width: i32) {
        self.calls.push(DrawCall::StrokeRect {
            x,
            y,
            w,
            h,
            color,
            line_width,
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, line_width: i32) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            line_width,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &str, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
        });
    }
}
