use crate::color::Color;

/// Text displayed by a label, with the styling the label draws it with
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    /// The text to display
    pub text: String,
    /// Font size in pixels
    ///
    /// Before the first measure pass this is the configured size; afterwards it is
    /// the fitted size.
    pub font_size: f32,
    /// Text color
    pub color: Color,
    /// Horizontal alignment within the label
    pub h_align: HorizontalAlign,
}

impl TextContent {
    /// Create new text content with default styling
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 16.0,
            color: Color::black(),
            h_align: HorizontalAlign::Left,
        }
    }

    /// Set the font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set horizontal alignment
    pub fn with_h_align(mut self, align: HorizontalAlign) -> Self {
        self.h_align = align;
        self
    }
}

/// Horizontal text alignment
///
/// Text is always centered vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Start at the left padding edge
    #[default]
    Left,
    /// Center the text run across the full label width
    Center,
}
