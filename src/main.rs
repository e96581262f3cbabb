//! Auto-fitting label demo
//!
//! Fits a few strings into a few widths with the system fonts and logs the chosen sizes
//! and draw commands.

use autofit::{
    AutoFitLabel, ConstraintMeasure, ContentMeasurer, FixedAdvanceMeasurer, FullOutput,
    HeightMode, HorizontalAlign, LabelStyle, MeasureConstraints, Rect, Spacing,
};
use autofit_text::CosmicMeasurer;

const BASE_FONT_SIZE: f32 = 40.0;
const LABEL_HEIGHT: f32 = 64.0;
const WIDTHS: [f32; 4] = [480.0, 240.0, 120.0, 24.0];
const TEXTS: [&str; 3] = [
    "Hello",
    "Auto-fitting labels shrink to fit",
    "A much longer line of text that has to get quite small before it fits",
];

fn run<M: ContentMeasurer>(measurer: &mut M) {
    let defaults = LabelStyle {
        font_size: Some(BASE_FONT_SIZE),
        padding: Some(Spacing::symmetric(8.0, 4.0)),
        ..Default::default()
    };
    let centered = LabelStyle {
        h_align: Some(HorizontalAlign::Center),
        height_mode: Some(HeightMode::Wrap),
        ..Default::default()
    };

    let mut output = FullOutput::new();

    for text in TEXTS {
        let mut label = AutoFitLabel::from_style_with_defaults(text, &centered, &defaults);

        for width in WIDTHS {
            let size = label.measure(
                MeasureConstraints::exact(width, LABEL_HEIGHT),
                &mut ConstraintMeasure,
                measurer,
            );
            log::info!(
                "{width:>5}px wide: {:.1}px font, {:.1}px tall for {text:?}",
                label.font_size(),
                size.height,
            );

            output.clear();
            label.draw(Rect::from_size(size.width, size.height), measurer, &mut output);
            for command in &output.texts {
                log::debug!(
                    "  draw {:?} at ({:.1}, {:.1})",
                    command.text,
                    command.origin[0],
                    command.origin[1]
                );
            }
        }
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting auto-fitting label demo...");

    let mut cosmic = CosmicMeasurer::new_system();
    if cosmic.face_count() > 0 {
        run(&mut cosmic);
    } else {
        log::warn!("no system fonts found, falling back to fixed-advance measurement");
        run(&mut FixedAdvanceMeasurer::default());
    }
}
