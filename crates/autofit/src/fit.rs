//! The font size search.

use crate::config::FitConfig;

/// Find the largest font size at or below `base` whose text width fits `content_width`.
///
/// Starts at `base` (clamped to the configured maximum) and shrinks by the configured
/// step while `width_at(size)` exceeds `content_width`. The configured minimum is a hard
/// floor: once a candidate reaches it the search stops and returns the minimum, whether
/// or not the text fits. The same floor applies when `base` itself is below the minimum.
///
/// Runs at most `(max_font_size - min_font_size) / step + 1` width queries.
pub fn fit_font_size(
    base: f32,
    content_width: f32,
    config: &FitConfig,
    mut width_at: impl FnMut(f32) -> f32,
) -> f32 {
    let min = config.min_font_size();

    let mut size = base.min(config.max_font_size());
    if size < base {
        log::debug!(
            "base font size {base}px clamped to maximum {}px",
            config.max_font_size()
        );
    }

    // Also catches a NaN base.
    if !(size > min) {
        return min;
    }

    loop {
        let width = width_at(size);
        if !width.is_finite() {
            log::warn!("non-finite text width {width} at {size}px, treating as overflow");
        }
        if width.is_finite() && width <= content_width {
            return size;
        }

        size -= config.step();
        if size <= min {
            log::debug!("font size reached floor {min}px for content width {content_width}px");
            return min;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// `width = k * size`
    fn linear(k: f32) -> impl FnMut(f32) -> f32 {
        move |size| k * size
    }

    #[test]
    fn test_fits_at_base_without_iterating() {
        let mut calls = 0;
        let size = fit_font_size(40.0, 100.0, &FitConfig::default(), |s| {
            calls += 1;
            s
        });
        assert_eq!(size, 40.0);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_hello_lands_on_largest_fitting_size() {
        // measured_width("Hello", 40) == 50
        let size = fit_font_size(40.0, 38.0, &FitConfig::default(), linear(1.25));
        assert_eq!(size, 30.0);
        assert!(1.25 * size <= 38.0);
        assert!(1.25 * (size + 1.0) > 38.0);
    }

    #[test]
    fn test_floor_when_nothing_fits() {
        let mut calls = 0;
        let size = fit_font_size(40.0, 1.0, &FitConfig::default(), |s| {
            calls += 1;
            10.0 * s
        });
        assert_eq!(size, 2.0);
        // 40, 39, ..., 3 are measured; 2 is the floor
        assert_eq!(calls, 38);
    }

    #[test]
    fn test_floor_with_negative_content_width() {
        let size = fit_font_size(24.0, -10.0, &FitConfig::default(), |_| 0.0);
        assert_eq!(size, 2.0);
    }

    #[test]
    fn test_base_below_floor_yields_floor() {
        let size = fit_font_size(1.0, 100.0, &FitConfig::default(), linear(1.0));
        assert_eq!(size, 2.0);
        let size = fit_font_size(0.0, 100.0, &FitConfig::default(), linear(1.0));
        assert_eq!(size, 2.0);
    }

    #[test]
    fn test_fractional_base_never_crosses_floor() {
        let size = fit_font_size(40.5, 0.5, &FitConfig::default(), linear(1.0));
        assert_eq!(size, 2.0);
    }

    #[test]
    fn test_non_finite_width_is_overflow() {
        let size = fit_font_size(10.0, 100.0, &FitConfig::default(), |s| {
            if s > 8.0 {
                f32::NAN
            } else {
                s
            }
        });
        assert_eq!(size, 8.0);
    }

    #[test]
    fn test_infinite_width_never_fits() {
        let size = fit_font_size(40.0, f32::INFINITY, &FitConfig::default(), |_| f32::INFINITY);
        assert_eq!(size, 2.0);
    }

    #[test]
    fn test_custom_step_and_floor() {
        let config = FitConfig::new(6.0, 4.0).unwrap();
        // 40 -> 36 -> 32 fits (32 <= 33)
        assert_eq!(fit_font_size(40.0, 33.0, &config, linear(1.0)), 32.0);
        // 40 -> ... -> 8 -> 4 <= 6 => floor
        assert_eq!(fit_font_size(40.0, 5.0, &config, linear(1.0)), 6.0);
    }

    #[test]
    fn test_large_base_is_bounded_by_maximum() {
        let config = FitConfig::default().with_max_font_size(64.0).unwrap();
        let mut calls = 0;
        let size = fit_font_size(1.0e9, 1.0, &config, |s| {
            calls += 1;
            s * 100.0
        });
        assert_eq!(size, 2.0);
        assert_eq!(calls, 62);
    }

    #[test]
    fn test_result_within_bounds_and_fits_or_floor() {
        let config = FitConfig::default();
        for base in [2.0_f32, 3.0, 12.0, 40.0, 97.5] {
            for content_width in [-5.0_f32, 0.0, 3.0, 17.0, 38.0, 250.0] {
                for k in [0.3_f32, 1.0, 2.75] {
                    let size = fit_font_size(base, content_width, &config, linear(k));
                    assert!(size >= config.min_font_size());
                    assert!(size <= base);
                    assert!(k * size <= content_width || size == config.min_font_size());
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_content_width() {
        let config = FitConfig::default();
        let mut previous = config.min_font_size();
        for content_width in (0..200).map(|w| w as f32 * 0.5) {
            let size = fit_font_size(48.0, content_width, &config, linear(1.7));
            assert!(size >= previous, "{size} < {previous} at {content_width}");
            previous = size;
        }
    }
}
