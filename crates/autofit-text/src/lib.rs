//! Text measurement for `autofit` labels.
//!
//! # Design goals
//! - **Backend-agnostic**: no renderer types; this crate only reports widths and line metrics.
//! - **Reusable**: one measurer keeps its font database and is shared by every label.
//!
//! # Current implementation
//! The `cosmic` feature provides [`cosmic::CosmicMeasurer`], which shapes with `cosmic-text`
//! against the system fonts or against font bytes supplied by the caller.
//!
//! NOTE: Glyph rasterization is out of scope; renderers consume `autofit::DrawText`.

#![deny(warnings)]

use std::path::PathBuf;

/// Font loading failure.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    #[error("no font faces found in {}", .0.display())]
    NoFaces(PathBuf),

    #[error("no font faces found in {0} bytes of font data")]
    NoFacesInData(usize),
}

pub type Result<T> = std::result::Result<T, TextError>;

#[cfg(feature = "cosmic")]
pub use cosmic::CosmicMeasurer;

#[cfg(feature = "cosmic")]
pub mod cosmic {
    //! `cosmic-text` implementation of [`ContentMeasurer`].
    //!
    //! Each request shapes a single unwrapped line; widths come from the layout run and
    //! metrics from the run's baseline position inside its line box.

    use std::path::Path;

    use autofit::{ContentMeasurer, FontMetrics, IntrinsicSize, MeasureTextRequest};
    use cosmic_text::{fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

    use super::{Result, TextError};

    /// Line box height per pixel of font size.
    const LINE_HEIGHT_RATIO: f32 = 1.2;

    /// Used to read metrics off a shaped line; has an ascender and a descender.
    const METRICS_PROBE: &str = "Hg";

    /// Metrics used when nothing could be shaped (no matching faces).
    pub(crate) fn fallback_metrics(font_size: f32) -> FontMetrics {
        let line_height = font_size * LINE_HEIGHT_RATIO;
        let ascent = font_size * 0.9;
        FontMetrics::new(-ascent, line_height - ascent)
    }

    /// One shaped line
    struct ShapedLine {
        width: f32,
        line_height: f32,
        /// Baseline offset from top of line box
        baseline: f32,
        has_glyphs: bool,
    }

    /// Concrete measurer backed by `cosmic-text`.
    pub struct CosmicMeasurer {
        font_system: FontSystem,
        /// Family used when a request does not name one; sans-serif when unset.
        family: Option<String>,
    }

    impl CosmicMeasurer {
        /// Create a measurer over the fonts installed on the system.
        pub fn new_system() -> Self {
            let font_system = FontSystem::new();
            log::info!("loaded {} system font faces", font_system.db().len());
            Self::from_font_system(font_system)
        }

        /// Create a measurer over a font system the caller configured.
        pub fn from_font_system(font_system: FontSystem) -> Self {
            Self {
                font_system,
                family: None,
            }
        }

        /// Create a measurer over in-memory font bytes only.
        pub fn from_font_data(data: Vec<u8>) -> Result<Self> {
            let len = data.len();
            let mut db = fontdb::Database::new();
            db.load_font_data(data);
            if db.is_empty() {
                return Err(TextError::NoFacesInData(len));
            }

            Ok(Self::from_database(db))
        }

        /// Create a measurer over a single font file.
        pub fn from_font_file(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let data = std::fs::read(path)?;

            let mut db = fontdb::Database::new();
            db.load_font_data(data);
            if db.is_empty() {
                return Err(TextError::NoFaces(path.to_path_buf()));
            }

            log::info!("loaded {} font faces from {}", db.len(), path.display());
            Ok(Self::from_database(db))
        }

        fn from_database(db: fontdb::Database) -> Self {
            Self::from_font_system(FontSystem::new_with_locale_and_db("en-US".to_string(), db))
        }

        /// Set the family used when a request does not name one.
        pub fn with_family(mut self, family: impl Into<String>) -> Self {
            self.family = Some(family.into());
            self
        }

        /// Access the underlying `FontSystem` if callers want to customize further.
        pub fn font_system_mut(&mut self) -> &mut FontSystem {
            &mut self.font_system
        }

        /// Number of font faces available for shaping.
        pub fn face_count(&self) -> usize {
            self.font_system.db().len()
        }

        fn shape(
            &mut self,
            text: &str,
            font_size: f32,
            family: Option<&str>,
        ) -> Option<ShapedLine> {
            // Buffer construction rejects a zero line height.
            if !font_size.is_finite() || font_size <= 0.0 {
                return None;
            }

            let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_RATIO);
            let mut buffer = Buffer::new(&mut self.font_system, metrics);

            // Prevent wrapping. Height stays unbounded so no run is scrolled out.
            buffer.set_size(&mut self.font_system, Some(f32::MAX), None);

            let attrs = match family.or(self.family.as_deref()) {
                Some(name) => Attrs::new().family(Family::Name(name)),
                None => Attrs::new().family(Family::SansSerif),
            };

            buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
            buffer.shape_until_scroll(&mut self.font_system, false);

            // `layout_runs()` may yield multiple runs even for one line; metrics come
            // from the first, width from the widest.
            let mut runs = buffer.layout_runs();
            let first = runs.next()?;
            let mut line = ShapedLine {
                width: first.line_w,
                line_height: first.line_height,
                baseline: (first.line_y - first.line_top).max(0.0),
                has_glyphs: !first.glyphs.is_empty(),
            };
            for run in runs {
                line.width = line.width.max(run.line_w);
                line.has_glyphs |= !run.glyphs.is_empty();
            }
            Some(line)
        }
    }

    impl ContentMeasurer for CosmicMeasurer {
        fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
            match self.shape(request.text, request.font_size, request.family) {
                Some(line) => IntrinsicSize::new(line.width, line.line_height),
                None => IntrinsicSize::zero(),
            }
        }

        fn font_metrics(&mut self, font_size: f32) -> FontMetrics {
            if !font_size.is_finite() || font_size <= 0.0 {
                return FontMetrics::default();
            }

            match self.shape(METRICS_PROBE, font_size, None) {
                Some(line) if line.has_glyphs => {
                    FontMetrics::new(-line.baseline, line.line_height - line.baseline)
                }
                _ => {
                    log::debug!("no shapable faces at {font_size}px, using fallback metrics");
                    fallback_metrics(font_size)
                }
            }
        }
    }
}

#[cfg(all(test, feature = "cosmic"))]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("autofit-text-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_font_file_is_io_error() {
        let result = CosmicMeasurer::from_font_file(scratch_path("missing.ttf"));
        assert!(matches!(result, Err(TextError::Io(_))));
    }

    #[test]
    fn test_garbage_font_file_has_no_faces() {
        let path = scratch_path("garbage.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let result = CosmicMeasurer::from_font_file(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(TextError::NoFaces(reported)) => assert_eq!(reported, path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("garbage bytes produced font faces"),
        }
    }

    #[test]
    fn test_garbage_font_data_has_no_faces() {
        let result = CosmicMeasurer::from_font_data(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(TextError::NoFacesInData(21))));
    }

    #[test]
    fn test_fallback_metrics_line_height() {
        let metrics = cosmic::fallback_metrics(20.0);
        assert!(metrics.ascent < 0.0);
        assert!(metrics.descent > 0.0);
        assert!((metrics.line_height() - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_positive_sizes_measure_as_empty() {
        use autofit::{ContentMeasurer, FontMetrics, IntrinsicSize, MeasureTextRequest};

        let mut measurer = CosmicMeasurer::from_font_system(
            cosmic_text::FontSystem::new_with_locale_and_db(
                "en-US".to_string(),
                cosmic_text::fontdb::Database::new(),
            ),
        );
        assert_eq!(measurer.face_count(), 0);
        assert_eq!(
            measurer.measure_text(MeasureTextRequest::new("Hello", 0.0)),
            IntrinsicSize::zero()
        );
        assert_eq!(measurer.font_metrics(-3.0), FontMetrics::default());
    }
}
