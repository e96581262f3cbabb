//! # autofit
//!
//! Graphics backend agnostic auto-fitting text label.
//!
//! An [`AutoFitLabel`] shrinks its font size until its text fits the width the host
//! layout gives it, never going below a configured floor. Text measurement, host
//! measurement and drawing are injected through the [`ContentMeasurer`],
//! [`BaseMeasure`] and [`Canvas`] traits, so this crate has no dependency on any text
//! engine or renderer. `autofit-text` provides a `cosmic-text` measurer.

mod color;
mod config;
mod content;
mod fit;
mod host;
mod label;
mod layout;
mod measure;
mod output;
mod primitives;
mod style;

pub use color::*;
pub use config::*;
pub use content::*;
pub use fit::*;
pub use host::*;
pub use label::*;
pub use layout::*;
pub use measure::*;
pub use output::*;
pub use primitives::*;
pub use style::*;
