use std::f32::consts::PI;

use orbis_engine::coords::{Vec2, Viewport};

use crate::camera::Camera;
use crate::math::{self, Vec3};
use crate::settings::OrbitSettings;

/// Keeps the polar angle away from the poles, where `look_at` degenerates.
const POLAR_EPS: f32 = 1e-3;

/// Drag-to-orbit and wheel-to-dolly camera controls around the camera target.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    settings: OrbitSettings,
    dragging: bool,
    disposed: bool,
}

impl OrbitControls {
    pub fn new(settings: OrbitSettings) -> Self {
        Self {
            settings,
            dragging: false,
            disposed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.settings.enabled && !self.disposed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Primary button pressed over the mount.
    pub fn begin_drag(&mut self) {
        self.dragging = self.is_active();
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Orbits by a pointer motion of `delta` logical pixels. A drag across the
    /// full mount height is one full turn.
    pub fn drag(&mut self, camera: &mut Camera, delta: Vec2, viewport: Viewport) {
        if !self.dragging || !self.is_active() || !viewport.is_valid() || !delta.is_finite() {
            return;
        }
        let k = 2.0 * PI * self.settings.rotate_speed / viewport.height;
        self.orbit(camera, delta.x * k, delta.y * k);
    }

    /// Dollies toward the target for positive `lines`, away for negative ones.
    pub fn wheel(&mut self, camera: &mut Camera, lines: f32) {
        if !self.is_active() || lines == 0.0 || !lines.is_finite() {
            return;
        }
        let factor = 0.95f32.powf(self.settings.zoom_speed * lines);
        let (r, theta, phi) = spherical(math::sub(camera.position, camera.target));
        self.place(camera, r * factor, theta, phi);
    }

    /// Detaches the controls; further input is ignored.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.dragging = false;
    }

    fn orbit(&self, camera: &mut Camera, left: f32, up: f32) {
        let (r, theta, phi) = spherical(math::sub(camera.position, camera.target));
        self.place(camera, r, theta - left, phi - up);
    }

    fn place(&self, camera: &mut Camera, r: f32, theta: f32, phi: f32) {
        let min = self.settings.min_distance;
        let r = r.clamp(min, self.settings.max_distance.max(min));
        let phi = phi.clamp(POLAR_EPS, PI - POLAR_EPS);
        let offset = [r * phi.sin() * theta.sin(), r * phi.cos(), r * phi.sin() * theta.cos()];
        camera.position = math::add(camera.target, offset);
    }
}

/// `(radius, theta, phi)` with Y up; theta is measured from +Z toward +X.
fn spherical(offset: Vec3) -> (f32, f32, f32) {
    let r = math::length(offset);
    if r == 0.0 {
        return (0.0, 0.0, PI / 2.0);
    }
    let theta = offset[0].atan2(offset[2]);
    let phi = (offset[1] / r).clamp(-1.0, 1.0).acos();
    (r, theta, phi)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn camera() -> Camera {
        let mut cam = Camera::new(VP.aspect());
        cam.reset_x();
        cam
    }

    #[test]
    fn drag_keeps_distance() {
        let mut cam = camera();
        let before = cam.distance();
        let mut controls = OrbitControls::new(OrbitSettings::default());
        controls.begin_drag();
        controls.drag(&mut cam, Vec2::new(120.0, 40.0), VP);
        assert!((cam.distance() - before).abs() < 1e-4);
        assert_ne!(cam.position[0], 0.0);
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(OrbitSettings::default());
        controls.drag(&mut cam, Vec2::new(120.0, 40.0), VP);
        assert_eq!(cam.position, camera().position);
    }

    #[test]
    fn wheel_dollies_within_limits() {
        let mut cam = camera();
        let start = cam.distance();
        let mut controls = OrbitControls::new(OrbitSettings::default());

        controls.wheel(&mut cam, 1.0);
        assert!(cam.distance() < start);

        controls.wheel(&mut cam, -1000.0);
        assert!((cam.distance() - 50.0).abs() < 1e-3);

        controls.wheel(&mut cam, 1000.0);
        assert!((cam.distance() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_never_reaches_pole() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(OrbitSettings::default());
        controls.begin_drag();
        controls.drag(&mut cam, Vec2::new(0.0, -10_000.0), VP);
        let (_, _, phi) = spherical(cam.position);
        assert!(phi > 0.0 && phi < PI);
    }

    #[test]
    fn disposed_controls_ignore_input() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(OrbitSettings::default());
        controls.dispose();
        controls.begin_drag();
        assert!(!controls.is_dragging());
        controls.wheel(&mut cam, 3.0);
        assert_eq!(cam.position, camera().position);
    }
}
