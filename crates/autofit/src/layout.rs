/// Declared height of a label.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HeightMode {
    /// Keep whatever height the host measurement produced.
    #[default]
    Fixed,
    /// Size the height to one line of text at the base font size, plus vertical padding.
    Wrap,
}

impl HeightMode {
    /// Check if this height mode is Wrap
    pub const fn is_wrap(&self) -> bool {
        matches!(self, HeightMode::Wrap)
    }
}

/// Constraint on one axis handed down by the parent layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Constraint {
    /// The parent dictates the exact size in pixels.
    Exactly(f32),
    /// The label may be as large as it wants up to this many pixels.
    AtMost(f32),
    /// No limit; the label reports its intrinsic size.
    #[default]
    Unspecified,
}

impl Constraint {
    /// Resolve the constraint against the intrinsic size of the content.
    pub fn resolve(&self, intrinsic: f32) -> f32 {
        match self {
            Constraint::Exactly(px) => *px,
            Constraint::AtMost(px) => intrinsic.min(*px),
            Constraint::Unspecified => intrinsic,
        }
    }
}

/// Width and height constraints for a measure pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasureConstraints {
    pub width: Constraint,
    pub height: Constraint,
}

impl MeasureConstraints {
    pub const fn new(width: Constraint, height: Constraint) -> Self {
        Self { width, height }
    }

    /// Both axes fixed to exact pixel sizes
    pub const fn exact(width: f32, height: f32) -> Self {
        Self::new(Constraint::Exactly(width), Constraint::Exactly(height))
    }

    /// Both axes bounded from above
    pub const fn at_most(width: f32, height: f32) -> Self {
        Self::new(Constraint::AtMost(width), Constraint::AtMost(height))
    }
}

/// Result of a measure pass, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasuredSize {
    pub width: f32,
    pub height: f32,
}

impl MeasuredSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Spacing/padding around content
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Create spacing with all sides equal
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create zero spacing
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    ///
    /// ```
    /// # use autofit::Spacing;
    /// let spacing = Spacing::symmetric(10.0, 20.0);
    /// assert_eq!(spacing.left, 10.0);
    /// assert_eq!(spacing.right, 10.0);
    /// assert_eq!(spacing.top, 20.0);
    /// assert_eq!(spacing.bottom, 20.0);
    /// ```
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create spacing from individual top, right, bottom, left values (CSS-style)
    ///
    /// ```
    /// # use autofit::Spacing;
    /// let spacing = Spacing::trbl(10.0, 20.0, 30.0, 40.0);
    /// assert_eq!(spacing.top, 10.0);
    /// assert_eq!(spacing.right, 20.0);
    /// assert_eq!(spacing.bottom, 30.0);
    /// assert_eq!(spacing.left, 40.0);
    /// ```
    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn horizontal(horizontal: f32) -> Self {
        Self::symmetric(horizontal, 0.0)
    }

    pub const fn vertical(vertical: f32) -> Self {
        Self::symmetric(0.0, vertical)
    }

    pub const fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub const fn get_horizontal(&self) -> f32 {
        self.right + self.left
    }
}
