use crate::math::{self, Mat4, Vec3};

/// Position the camera starts from before [`Camera::reset_x`].
pub const INITIAL_POSITION: Vec3 = [2.0, -1.2, 1.0];

/// Perspective camera looking at a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: INITIAL_POSITION,
            target: [0.0; 3],
            up: [0.0, 1.0, 0.0],
            fov_y: 45.0,
            near: 0.1,
            far: 1000.0,
            aspect,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Puts the camera back on the YZ plane.
    pub fn reset_x(&mut self) {
        self.position[0] = 0.0;
    }

    pub fn distance(&self) -> f32 {
        math::length(math::sub(self.position, self.target))
    }

    pub fn view(&self) -> Mat4 {
        math::look_at(self.position, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        math::perspective(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        math::mul(&self.projection(), &self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_x_zeroes_only_x() {
        let mut cam = Camera::new(1.0);
        cam.position = [7.5, -1.2, 1.0];
        cam.reset_x();
        assert_eq!(cam.position, [0.0, -1.2, 1.0]);
    }

    #[test]
    fn rejects_bad_aspect() {
        let mut cam = Camera::new(2.0);
        cam.set_aspect(f32::NAN);
        cam.set_aspect(0.0);
        assert_eq!(cam.aspect(), 2.0);
        cam.set_aspect(800.0 / 600.0);
        assert_eq!(cam.aspect(), 800.0 / 600.0);
    }
}
