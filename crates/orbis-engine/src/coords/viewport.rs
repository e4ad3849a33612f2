/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height. Meaningless for an invalid viewport; check `is_valid` first.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    /// Size in physical pixels for the given device scale, at least 1x1.
    pub fn physical(self, scale: f32) -> (u32, u32) {
        let w = (self.width * scale).round().max(1.0) as u32;
        let h = (self.height * scale).round().max(1.0) as u32;
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_nan_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, 0.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 600.0).is_valid());
        assert!(!Viewport::new(800.0, f32::INFINITY).is_valid());
        assert!(Viewport::new(800.0, 600.0).is_valid());
    }

    #[test]
    fn aspect_is_width_over_height() {
        assert!((Viewport::new(800.0, 600.0).aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn physical_rounds_and_floors_at_one() {
        assert_eq!(Viewport::new(800.0, 600.0).physical(1.5), (1200, 900));
        assert_eq!(Viewport::new(0.2, 0.2).physical(1.0), (1, 1));
    }
}
