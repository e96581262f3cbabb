/// Smallest font size the search will ever produce, in pixels.
pub const DEFAULT_MIN_FONT_SIZE: f32 = 2.0;

/// Amount the search shrinks the font size by per iteration, in pixels.
pub const DEFAULT_FONT_SIZE_STEP: f32 = 1.0;

/// Largest font size the search starts from, in pixels.
///
/// Bounds the number of iterations for very large configured sizes.
pub const DEFAULT_MAX_FONT_SIZE: f32 = 1024.0;

/// Invalid fitting configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum font size must be finite and positive, got {0}")]
    InvalidMinimum(f32),

    #[error("font size step must be finite and positive, got {0}")]
    InvalidStep(f32),

    #[error("maximum font size {max} must be finite and not below the minimum {min}")]
    InvalidMaximum { max: f32, min: f32 },
}

/// How a label searches for a font size that fits.
///
/// Only valid configurations can be constructed: the fallible constructors check that
/// `0 < min_font_size <= max_font_size` and `step > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    min_font_size: f32,
    step: f32,
    max_font_size: f32,
    force_single_line: bool,
    anti_alias: bool,
}

impl FitConfig {
    /// Create a config with a custom floor and step.
    pub fn new(min_font_size: f32, step: f32) -> Result<Self, ConfigError> {
        let config = Self {
            min_font_size,
            step,
            ..Self::single_line()
        };
        config.validate()?;
        Ok(config)
    }

    /// The default: text is forced onto a single line.
    pub const fn single_line() -> Self {
        Self {
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            step: DEFAULT_FONT_SIZE_STEP,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            force_single_line: true,
            anti_alias: true,
        }
    }

    /// Text is used verbatim and the host may size for several lines.
    pub const fn unconstrained_lines() -> Self {
        Self::single_line().with_force_single_line(false)
    }

    /// Set the floor the search never goes below.
    pub fn with_min_font_size(mut self, min_font_size: f32) -> Result<Self, ConfigError> {
        self.min_font_size = min_font_size;
        self.validate()?;
        Ok(self)
    }

    /// Set how much each iteration shrinks the font size by.
    pub fn with_step(mut self, step: f32) -> Result<Self, ConfigError> {
        self.step = step;
        self.validate()?;
        Ok(self)
    }

    /// Set the largest size the search starts from.
    pub fn with_max_font_size(mut self, max_font_size: f32) -> Result<Self, ConfigError> {
        self.max_font_size = max_font_size;
        self.validate()?;
        Ok(self)
    }

    pub const fn with_force_single_line(mut self, enabled: bool) -> Self {
        self.force_single_line = enabled;
        self
    }

    pub const fn with_anti_alias(mut self, enabled: bool) -> Self {
        self.anti_alias = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_font_size.is_finite() || self.min_font_size <= 0.0 {
            return Err(ConfigError::InvalidMinimum(self.min_font_size));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            return Err(ConfigError::InvalidMaximum {
                max: self.max_font_size,
                min: self.min_font_size,
            });
        }
        // A step that vanishes against the largest size would never shrink it.
        if self.max_font_size - self.step >= self.max_font_size {
            return Err(ConfigError::InvalidStep(self.step));
        }
        Ok(())
    }

    pub const fn min_font_size(&self) -> f32 {
        self.min_font_size
    }

    pub const fn step(&self) -> f32 {
        self.step
    }

    pub const fn max_font_size(&self) -> f32 {
        self.max_font_size
    }

    pub const fn force_single_line(&self) -> bool {
        self.force_single_line
    }

    pub const fn anti_alias(&self) -> bool {
        self.anti_alias
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::single_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_valid() {
        let config = FitConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_font_size(), 2.0);
        assert_eq!(config.step(), 1.0);
        assert!(config.force_single_line());
        assert!(config.anti_alias());
    }

    #[test]
    fn test_rejects_bad_minimum() {
        assert_eq!(
            FitConfig::new(0.0, 1.0),
            Err(ConfigError::InvalidMinimum(0.0))
        );
        assert!(FitConfig::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_rejects_bad_step() {
        assert_eq!(FitConfig::new(2.0, -1.0), Err(ConfigError::InvalidStep(-1.0)));
        assert!(FitConfig::new(2.0, f32::INFINITY).is_err());
        assert_eq!(FitConfig::new(2.0, 1e-9), Err(ConfigError::InvalidStep(1e-9)));
    }

    #[test]
    fn test_rejects_maximum_below_minimum() {
        let result = FitConfig::new(8.0, 1.0).and_then(|c| c.with_max_font_size(4.0));
        assert_eq!(
            result,
            Err(ConfigError::InvalidMaximum { max: 4.0, min: 8.0 })
        );
    }

    #[test]
    fn test_min_and_step_builders() {
        let config = FitConfig::default()
            .with_min_font_size(6.0)
            .and_then(|c| c.with_step(0.5))
            .unwrap();
        assert_eq!(config.min_font_size(), 6.0);
        assert_eq!(config.step(), 0.5);
        assert_eq!(config.max_font_size(), DEFAULT_MAX_FONT_SIZE);
    }

    #[test]
    fn test_min_and_step_builders_revalidate() {
        assert_eq!(
            FitConfig::default().with_min_font_size(-1.0),
            Err(ConfigError::InvalidMinimum(-1.0))
        );
        assert_eq!(
            FitConfig::default().with_step(0.0),
            Err(ConfigError::InvalidStep(0.0))
        );
        assert_eq!(
            FitConfig::default().with_min_font_size(2048.0),
            Err(ConfigError::InvalidMaximum {
                max: DEFAULT_MAX_FONT_SIZE,
                min: 2048.0
            })
        );
    }

    #[test]
    fn test_unconstrained_lines_keeps_other_defaults() {
        let config = FitConfig::unconstrained_lines();
        assert!(!config.force_single_line());
        assert_eq!(config.min_font_size(), DEFAULT_MIN_FONT_SIZE);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidStep(0.0).to_string(),
            "font size step must be finite and positive, got 0"
        );
    }
}
