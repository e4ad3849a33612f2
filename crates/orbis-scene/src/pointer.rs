use orbis_engine::coords::{Vec2, Viewport};

/// Maps a position in mount pixels to `[-1, 1]` on both axes.
///
/// `(0, 0)` maps to `(-1, -1)` and the mount's far corner to `(1, 1)`; Y is
/// not flipped. Positions outside the mount are clamped. An invalid viewport
/// yields the centre.
pub fn normalize(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    if !viewport.is_valid() || !x.is_finite() || !y.is_finite() {
        return Vec2::zero();
    }
    Vec2::new(x / viewport.width * 2.0 - 1.0, y / viewport.height * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Raw pointer position and its smoothed follower, both in `[-1, 1]`.
///
/// The smoothed value is advanced by [`crate::uniforms::step_frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
}

impl PointerState {
    /// Stores a new raw target.
    pub fn set_raw(&mut self, raw: Vec2) {
        self.raw = if raw.is_finite() { raw.clamp(-1.0, 1.0) } else { Vec2::zero() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn corners_and_centre() {
        assert_eq!(normalize(0.0, 0.0, VP), Vec2::new(-1.0, -1.0));
        assert_eq!(normalize(400.0, 300.0, VP), Vec2::new(0.0, 0.0));
        assert_eq!(normalize(800.0, 600.0, VP), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn always_within_unit_range() {
        for &(x, y) in &[(-50.0, 10.0), (900.0, 700.0), (123.4, 567.8), (f32::MAX, -f32::MAX)] {
            let p = normalize(x, y, VP);
            assert!((-1.0..=1.0).contains(&p.x) && (-1.0..=1.0).contains(&p.y), "{p:?}");
        }
    }

    #[test]
    fn degenerate_inputs_map_to_centre() {
        assert_eq!(normalize(10.0, 10.0, Viewport::new(0.0, 600.0)), Vec2::zero());
        assert_eq!(normalize(f32::NAN, 10.0, VP), Vec2::zero());
    }

    #[test]
    fn raw_is_clamped_and_sanitized() {
        let mut p = PointerState::default();
        p.set_raw(Vec2::new(3.0, -0.5));
        assert_eq!(p.raw, Vec2::new(1.0, -0.5));
        p.set_raw(Vec2::new(f32::NAN, 0.0));
        assert_eq!(p.raw, Vec2::zero());
    }
}
