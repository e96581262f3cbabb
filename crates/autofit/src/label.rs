//! The auto-fitting label.
//!
//! A label holds one line of text and a configured font size. Every measure pass
//! shrinks the font, starting again from the size captured on the first pass, until
//! the text fits the measured width. The draw pass then centers the text vertically
//! and aligns it horizontally.

use std::borrow::Cow;

use crate::color::Color;
use crate::config::FitConfig;
use crate::content::{HorizontalAlign, TextContent};
use crate::fit::fit_font_size;
use crate::host::BaseMeasure;
use crate::layout::{HeightMode, MeasureConstraints, MeasuredSize, Spacing};
use crate::measure::{ContentMeasurer, MeasureTextRequest};
use crate::output::{Canvas, DrawText};
use crate::primitives::Rect;

/// Upper bound for the font size search, captured once per label.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BaseFontSize {
    /// No measure pass has run yet.
    #[default]
    Uninitialized,
    /// Font size configured when the first measure pass ran, in pixels.
    Captured(f32),
}

impl BaseFontSize {
    pub const fn get(&self) -> Option<f32> {
        match self {
            BaseFontSize::Uninitialized => None,
            BaseFontSize::Captured(size) => Some(*size),
        }
    }
}

/// Where one line of text goes inside a label's bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Left edge and baseline, in surface coordinates
    pub origin: [f32; 2],
    pub width: f32,
}

/// A text label that shrinks its font size until the text fits its width.
#[derive(Clone, Debug)]
pub struct AutoFitLabel {
    content: TextContent,
    padding: Spacing,
    height_mode: HeightMode,
    config: FitConfig,
    family: Option<String>,
    base_font_size: BaseFontSize,
    measured: Option<MeasuredSize>,
}

impl AutoFitLabel {
    /// Create a single-line label with default styling
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_content(TextContent::new(text), FitConfig::single_line())
    }

    /// Create a label that does not force its text onto one line
    pub fn multiline(text: impl Into<String>) -> Self {
        Self::from_content(TextContent::new(text), FitConfig::unconstrained_lines())
    }

    pub fn from_content(content: TextContent, config: FitConfig) -> Self {
        Self {
            content,
            padding: Spacing::zero(),
            height_mode: HeightMode::default(),
            config,
            family: None,
            base_font_size: BaseFontSize::Uninitialized,
            measured: None,
        }
    }

    /// Set the configured font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.content.font_size = size;
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.content.color = color;
        self
    }

    /// Set horizontal alignment
    pub fn with_h_align(mut self, align: HorizontalAlign) -> Self {
        self.content.h_align = align;
        self
    }

    /// Set the padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    /// Set the declared height mode
    pub fn with_height_mode(mut self, height_mode: HeightMode) -> Self {
        self.height_mode = height_mode;
        self
    }

    /// Set the fitting configuration
    pub fn with_config(mut self, config: FitConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the font family passed to the measurer and the canvas
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content.text = text.into();
    }

    /// Set the font size.
    ///
    /// Once the first measure pass has captured a base size this only changes the size
    /// until the next measure pass, which fits again from the captured base.
    pub fn set_font_size(&mut self, size: f32) {
        self.content.font_size = size;
    }

    pub fn set_color(&mut self, color: Color) {
        self.content.color = color;
    }

    pub fn set_h_align(&mut self, align: HorizontalAlign) {
        self.content.h_align = align;
    }

    pub fn set_padding(&mut self, padding: Spacing) {
        self.padding = padding;
    }

    pub fn set_height_mode(&mut self, height_mode: HeightMode) {
        self.height_mode = height_mode;
    }

    /// Forget the captured base size; the next measure pass captures the current size.
    pub fn reset_base_font_size(&mut self) {
        self.base_font_size = BaseFontSize::Uninitialized;
    }

    pub fn content(&self) -> &TextContent {
        &self.content
    }

    pub fn text(&self) -> &str {
        &self.content.text
    }

    /// Current font size in pixels
    pub fn font_size(&self) -> f32 {
        self.content.font_size
    }

    pub fn base_font_size(&self) -> Option<f32> {
        self.base_font_size.get()
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn h_align(&self) -> HorizontalAlign {
        self.content.h_align
    }

    pub fn height_mode(&self) -> HeightMode {
        self.height_mode
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Size produced by the last measure pass
    pub fn measured_size(&self) -> Option<MeasuredSize> {
        self.measured
    }

    /// `Some(1)` when the text is forced onto a single line
    pub fn max_lines(&self) -> Option<u32> {
        self.config.force_single_line().then_some(1)
    }

    /// Text as it is measured and drawn.
    ///
    /// Every line break (`\n`, `\r\n` or a lone `\r`) becomes `\n`; with single-line
    /// forcing it becomes a space instead.
    pub fn display_text(&self) -> Cow<'_, str> {
        let text = self.content.text.as_str();
        let force_single_line = self.config.force_single_line();
        if !text.contains('\r') && !(force_single_line && text.contains('\n')) {
            return Cow::Borrowed(text);
        }

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        if force_single_line {
            Cow::Owned(normalized.replace('\n', " "))
        } else {
            Cow::Owned(normalized)
        }
    }

    pub fn line_count(&self) -> usize {
        self.display_text().lines().count()
    }

    /// Width of the text at `font_size`; the widest line when the text has several.
    pub fn text_width<M>(&self, measurer: &mut M, font_size: f32) -> f32
    where
        M: ContentMeasurer + ?Sized,
    {
        let text = self.display_text();
        widest_line(measurer, &text, self.family.as_deref(), font_size)
    }

    /// Run a measure pass.
    ///
    /// The host measures first; the font is then shrunk from the base size until the text
    /// fits the host width minus horizontal padding. With [`HeightMode::Wrap`] the host
    /// height is replaced by one line at the base size plus vertical padding.
    pub fn measure<H, M>(
        &mut self,
        constraints: MeasureConstraints,
        host: &mut H,
        measurer: &mut M,
    ) -> MeasuredSize
    where
        H: BaseMeasure + ?Sized,
        M: ContentMeasurer,
    {
        let base = match self.base_font_size {
            BaseFontSize::Captured(size) => size,
            BaseFontSize::Uninitialized => {
                let size = self.content.font_size;
                log::trace!("captured base font size {size}px for {:?}", self.content.text);
                self.base_font_size = BaseFontSize::Captured(size);
                size
            }
        };

        let mut measured = host.base_measure(self, constraints, measurer);

        let content_width = measured.width - self.padding.get_horizontal();
        let font_size = {
            let text = self.display_text();
            let family = self.family.as_deref();
            fit_font_size(base, content_width, &self.config, |size| {
                widest_line(measurer, &text, family, size)
            })
        };
        self.content.font_size = font_size;

        if self.height_mode.is_wrap() {
            measured.height =
                measurer.font_metrics(base).line_height() + self.padding.get_vertical();
        }

        log::trace!(
            "measured {:?}: {}x{} at {font_size}px (base {base}px)",
            self.content.text,
            measured.width,
            measured.height
        );

        self.measured = Some(measured);
        measured
    }

    /// Compute where each line of text goes inside `bounds` at the current font size.
    ///
    /// Lines are stacked and the block is centered vertically. Each line starts at the
    /// left padding edge, or is centered across the full width with
    /// [`HorizontalAlign::Center`].
    pub fn placement<M: ContentMeasurer + ?Sized>(
        &self,
        bounds: Rect,
        measurer: &mut M,
    ) -> Vec<PlacedLine> {
        let font_size = self.content.font_size;
        let metrics = measurer.font_metrics(font_size);
        let line_height = metrics.line_height();

        let text = self.display_text();
        let line_count = text.lines().count();
        let block_height = line_height * line_count as f32;
        let first_baseline = -metrics.ascent + (bounds.height() - block_height) / 2.0;

        text.lines()
            .enumerate()
            .map(|(index, line)| {
                let width = line_width(measurer, line, self.family.as_deref(), font_size);
                let x = match self.content.h_align {
                    HorizontalAlign::Center => (bounds.width() - width) / 2.0,
                    HorizontalAlign::Left => self.padding.left,
                };
                let y = first_baseline + line_height * index as f32;

                PlacedLine {
                    text: line.to_string(),
                    origin: [bounds.min[0] + x, bounds.min[1] + y],
                    width,
                }
            })
            .collect()
    }

    /// Run a draw pass, writing one command per line to `canvas`.
    pub fn draw<M, C>(&self, bounds: Rect, measurer: &mut M, canvas: &mut C)
    where
        M: ContentMeasurer + ?Sized,
        C: Canvas + ?Sized,
    {
        for line in self.placement(bounds, measurer) {
            canvas.draw_text(DrawText {
                text: line.text,
                origin: line.origin,
                font_size: self.content.font_size,
                color: self.content.color,
                anti_alias: self.config.anti_alias(),
                family: self.family.clone(),
                clip_rect: bounds,
            });
        }
    }
}

fn line_width<M: ContentMeasurer + ?Sized>(
    measurer: &mut M,
    line: &str,
    family: Option<&str>,
    font_size: f32,
) -> f32 {
    measurer
        .measure_text(MeasureTextRequest {
            text: line,
            font_size,
            family,
        })
        .width
}

fn widest_line<M: ContentMeasurer + ?Sized>(
    measurer: &mut M,
    text: &str,
    family: Option<&str>,
    font_size: f32,
) -> f32 {
    text.lines()
        .map(|line| line_width(measurer, line, family, font_size))
        .fold(0.0, f32::max)
}
