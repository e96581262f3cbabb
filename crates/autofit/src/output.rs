use crate::color::Color;
use crate::primitives::Rect;

/// A single line of text to render.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawText {
    pub text: String,
    /// Pen position: left edge of the run and its baseline, in surface coordinates.
    pub origin: [f32; 2],
    /// Font size in pixels
    pub font_size: f32,
    pub color: Color,
    pub anti_alias: bool,
    /// Optional font family name (backend-defined meaning)
    pub family: Option<String>,
    /// Bounds of the label. Backends may clip to it; text at the floor size can overflow.
    pub clip_rect: Rect,
}

/// Rendering surface the draw pass writes to.
pub trait Canvas {
    fn draw_text(&mut self, text: DrawText);
}

impl Canvas for Vec<DrawText> {
    fn draw_text(&mut self, text: DrawText) {
        self.push(text);
    }
}

/// Canvas that records every draw command, for backends to consume after the pass
#[derive(Clone, Debug, Default)]
pub struct FullOutput {
    pub texts: Vec<DrawText>,
}

impl FullOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.texts.clear();
    }
}

impl Canvas for FullOutput {
    fn draw_text(&mut self, text: DrawText) {
        self.texts.push(text);
    }
}
