/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    /// Rect of the given size anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new([0.0, 0.0], [width, height])
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_min_size() {
        let rect = Rect::from_min_size([10.0, 20.0], [100.0, 30.0]);
        assert_eq!(rect.max, [110.0, 50.0]);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 30.0);
    }
}
