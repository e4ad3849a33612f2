use core::ops::Sub;

/// 2D vector.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise clamp.
    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        Self::new(self.x.clamp(min, max), self.y.clamp(min, max))
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_gives_motion_between_positions() {
        assert_eq!(Vec2::new(15.0, 12.0) - Vec2::new(10.0, 10.0), Vec2::new(5.0, 2.0));
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
    }

    #[test]
    fn clamp_bounds_each_axis() {
        assert_eq!(Vec2::new(-3.0, 0.5).clamp(-1.0, 1.0), Vec2::new(-1.0, 0.5));
    }
}
