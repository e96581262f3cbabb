//! Host measurement that runs before the label fits its font size.

use crate::label::AutoFitLabel;
use crate::layout::{MeasureConstraints, MeasuredSize};
use crate::measure::ContentMeasurer;

/// The host layout system's own measurement of a label.
///
/// The label calls this first, then shrinks its font to fit the returned width and
/// optionally overrides the returned height.
pub trait BaseMeasure {
    fn base_measure(
        &mut self,
        label: &AutoFitLabel,
        constraints: MeasureConstraints,
        measurer: &mut dyn ContentMeasurer,
    ) -> MeasuredSize;
}

impl<F> BaseMeasure for F
where
    F: FnMut(&AutoFitLabel, MeasureConstraints) -> MeasuredSize,
{
    fn base_measure(
        &mut self,
        label: &AutoFitLabel,
        constraints: MeasureConstraints,
        _measurer: &mut dyn ContentMeasurer,
    ) -> MeasuredSize {
        self(label, constraints)
    }
}

/// Measures like a plain text element: resolve each constraint against the text's
/// intrinsic size, padding included.
///
/// The intrinsic size is taken at the base font size once it is captured, so the
/// result does not depend on the size an earlier pass shrank to.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstraintMeasure;

impl BaseMeasure for ConstraintMeasure {
    fn base_measure(
        &mut self,
        label: &AutoFitLabel,
        constraints: MeasureConstraints,
        measurer: &mut dyn ContentMeasurer,
    ) -> MeasuredSize {
        let padding = label.padding();
        let font_size = label.base_font_size().unwrap_or(label.font_size());

        let intrinsic_width = label.text_width(measurer, font_size) + padding.get_horizontal();

        let line_count = label
            .max_lines()
            .unwrap_or_else(|| label.line_count().max(1) as u32);
        let line_height = measurer.font_metrics(font_size).line_height();
        let intrinsic_height = line_height * line_count as f32 + padding.get_vertical();

        MeasuredSize::new(
            constraints.width.resolve(intrinsic_width),
            constraints.height.resolve(intrinsic_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Constraint, Spacing};
    use crate::measure::FixedAdvanceMeasurer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_constraints_win() {
        let label = AutoFitLabel::new("Hello").with_font_size(40.0);
        let mut measurer = FixedAdvanceMeasurer::new(0.25);
        let size = ConstraintMeasure.base_measure(
            &label,
            MeasureConstraints::exact(120.0, 30.0),
            &mut measurer,
        );
        assert_eq!(size, MeasuredSize::new(120.0, 30.0));
    }

    #[test]
    fn test_intrinsic_size_includes_padding() {
        let label = AutoFitLabel::new("Hello")
            .with_font_size(40.0)
            .with_padding(Spacing::trbl(1.0, 2.0, 3.0, 4.0));
        let mut measurer = FixedAdvanceMeasurer::new(0.25);
        let size = ConstraintMeasure.base_measure(
            &label,
            MeasureConstraints::new(Constraint::Unspecified, Constraint::AtMost(1000.0)),
            &mut measurer,
        );
        // 50 + 6 wide, 40 + 4 tall
        assert_eq!(size, MeasuredSize::new(56.0, 44.0));
    }

    #[test]
    fn test_multiline_height_counts_lines() {
        let label = AutoFitLabel::multiline("one\ntwo\nthree").with_font_size(10.0);
        let mut measurer = FixedAdvanceMeasurer::new(1.0);
        let size = ConstraintMeasure.base_measure(
            &label,
            MeasureConstraints::default(),
            &mut measurer,
        );
        assert_eq!(size, MeasuredSize::new(50.0, 30.0));
    }

    #[test]
    fn test_closure_host() {
        let label = AutoFitLabel::new("Hello");
        let mut measurer = FixedAdvanceMeasurer::default();
        let mut host = |_label: &AutoFitLabel, _constraints: MeasureConstraints| {
            MeasuredSize::new(7.0, 9.0)
        };
        let size = host.base_measure(&label, MeasureConstraints::default(), &mut measurer);
        assert_eq!(size, MeasuredSize::new(7.0, 9.0));
    }
}
