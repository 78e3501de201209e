//! HTML canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Renderer};
use crate::error::PlatformError;

/// Draws onto a canvas through its 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, PlatformError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| PlatformError::Js(format!("{e:?}")))?
            .ok_or(PlatformError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PlatformError::ContextUnavailable)?;
        ctx.set_text_align("left");
        Ok(Self { ctx })
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, width: i32, height: i32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, line_width: i32) {
        self.ctx.set_line_width(line_width as f64);
        self.ctx.set_stroke_style_str(color.as_css());
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, line_width: i32) {
        self.ctx.set_line_width(line_width as f64);
        self.ctx.set_stroke_style_str(color.as_css());
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &str, color: Color) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color.as_css());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
