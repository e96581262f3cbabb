//! Text measurement for the fitting search.
//!
//! Core fitting must not depend on any specific text engine (cosmic-text, etc.), so
//! measurement goes through the [`ContentMeasurer`] trait. Backends like
//! `autofit-text` implement it; [`FixedAdvanceMeasurer`] is a deterministic stand-in.

/// Request to measure a single line of text.
#[derive(Debug, Clone, Copy)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font_size: f32,
    /// Optional font family name (backend-defined meaning)
    pub family: Option<&'a str>,
}

impl<'a> MeasureTextRequest<'a> {
    pub fn new(text: &'a str, font_size: f32) -> Self {
        Self {
            text,
            font_size,
            family: None,
        }
    }
}

/// Intrinsic size measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Vertical extents of a line of text at a given font size.
///
/// Offsets are relative to the baseline in a y-down coordinate system, so `ascent`
/// is zero or negative and `descent` is zero or positive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    pub const fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    /// Natural height of one line of text
    pub fn line_height(&self) -> f32 {
        self.descent - self.ascent
    }
}

/// Backend-agnostic text measurement.
///
/// Implementors may keep reusable scratch state (shaping buffers, caches), hence `&mut self`.
pub trait ContentMeasurer {
    /// Measure a single unwrapped line of text.
    ///
    /// Returns the advance width of the shaped run and its line height, excluding padding.
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;

    /// Font metrics at the given size.
    fn font_metrics(&mut self, font_size: f32) -> FontMetrics;
}

/// Measurer where every character advances by a fixed fraction of the font size.
///
/// Widths scale linearly with the font size, which makes fitting results exact and
/// predictable. Useful when no font is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance of one character per pixel of font size
    pub advance_ratio: f32,
    /// Ascent magnitude per pixel of font size
    pub ascent_ratio: f32,
    /// Descent per pixel of font size
    pub descent_ratio: f32,
}

impl FixedAdvanceMeasurer {
    pub const fn new(advance_ratio: f32) -> Self {
        Self {
            advance_ratio,
            ascent_ratio: 0.8,
            descent_ratio: 0.2,
        }
    }

    pub const fn with_metrics(mut self, ascent_ratio: f32, descent_ratio: f32) -> Self {
        self.ascent_ratio = ascent_ratio;
        self.descent_ratio = descent_ratio;
        self
    }

    fn width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_ratio * font_size
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ContentMeasurer for FixedAdvanceMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        let metrics = self.font_metrics(request.font_size);
        IntrinsicSize::new(
            self.width(request.text, request.font_size),
            metrics.line_height(),
        )
    }

    fn font_metrics(&mut self, font_size: f32) -> FontMetrics {
        FontMetrics::new(
            -self.ascent_ratio * font_size,
            self.descent_ratio * font_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_width_scales_with_size() {
        let mut measurer = FixedAdvanceMeasurer::new(0.25);
        let at_40 = measurer.measure_text(MeasureTextRequest::new("Hello", 40.0));
        let at_20 = measurer.measure_text(MeasureTextRequest::new("Hello", 20.0));
        assert_eq!(at_40.width, 50.0);
        assert_eq!(at_20.width, 25.0);
    }

    #[test]
    fn test_line_height_from_metrics() {
        let mut measurer = FixedAdvanceMeasurer::new(0.5).with_metrics(0.75, 0.25);
        let metrics = measurer.font_metrics(20.0);
        assert_eq!(metrics.ascent, -15.0);
        assert_eq!(metrics.descent, 5.0);
        assert_eq!(metrics.line_height(), 20.0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut measurer = FixedAdvanceMeasurer::new(1.0);
        let size = measurer.measure_text(MeasureTextRequest::new("héllo", 10.0));
        assert_eq!(size.width, 50.0);
    }
}
