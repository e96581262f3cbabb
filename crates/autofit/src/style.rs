use crate::color::Color;
use crate::content::HorizontalAlign;
use crate::label::AutoFitLabel;
use crate::layout::{HeightMode, Spacing};

/// Optional label attributes, applied at construction.
///
/// All fields are `Option<T>` so a style only overrides what it sets. Styles can be
/// layered: a theme default first, then the attributes of one label on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelStyle {
    /// Configured font size in pixels
    pub font_size: Option<f32>,

    pub text_color: Option<Color>,

    pub h_align: Option<HorizontalAlign>,

    pub padding: Option<Spacing>,

    pub height_mode: Option<HeightMode>,
}

impl LabelStyle {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style with only a font size
    pub fn font_size(size: f32) -> Self {
        Self {
            font_size: Some(size),
            ..Default::default()
        }
    }

    /// Merge this style with another, preferring values from `other` when present
    pub fn merge(&self, other: &LabelStyle) -> LabelStyle {
        LabelStyle {
            font_size: other.font_size.or(self.font_size),
            text_color: other.text_color.or(self.text_color),
            h_align: other.h_align.or(self.h_align),
            padding: other.padding.or(self.padding),
            height_mode: other.height_mode.or(self.height_mode),
        }
    }

    /// Apply the set fields to a label
    pub fn apply(&self, label: &mut AutoFitLabel) {
        if let Some(size) = self.font_size {
            label.set_font_size(size);
        }
        if let Some(color) = self.text_color {
            label.set_color(color);
        }
        if let Some(align) = self.h_align {
            label.set_h_align(align);
        }
        if let Some(padding) = self.padding {
            label.set_padding(padding);
        }
        if let Some(height_mode) = self.height_mode {
            label.set_height_mode(height_mode);
        }
    }
}

impl AutoFitLabel {
    /// Create a single-line label from style attributes
    pub fn from_style(text: impl Into<String>, style: &LabelStyle) -> Self {
        let mut label = Self::new(text);
        style.apply(&mut label);
        label
    }

    /// Create a single-line label from style attributes layered over `defaults`
    pub fn from_style_with_defaults(
        text: impl Into<String>,
        style: &LabelStyle,
        defaults: &LabelStyle,
    ) -> Self {
        Self::from_style(text, &defaults.merge(style))
    }
}
