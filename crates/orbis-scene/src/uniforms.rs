//! Per-frame uniform update.
//!
//! [`step_frame`] is the whole animation: given the clock, the pointer and the
//! previous frame's values it produces the next set of material uniforms and
//! the scene rotation. It touches no GPU state.

use bytemuck::{Pod, Zeroable};
use orbis_engine::coords::Vec2;

use crate::damping::damp;
use crate::math::{Mat4, Vec3};
use crate::settings::{SceneSettings, ShadingSettings};

/// Parallax rotation per unit of smoothed pointer, in radians.
pub const ROTATION_SCALE: f32 = 0.035;

/// Mesh time uniform before the first frame.
pub const MESH_START_TIME: f32 = 2.0;

/// The seven scalar uniforms shared by the mesh and particle materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialState {
    pub time: f32,
    pub speed: f32,
    pub noise_density: f32,
    pub noise_strength: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub intensity: f32,
}

impl MaterialState {
    pub fn new(shading: &ShadingSettings, time: f32) -> Self {
        Self {
            time,
            speed: shading.speed,
            noise_density: shading.density,
            noise_strength: shading.strength,
            frequency: shading.frequency,
            amplitude: shading.amplitude,
            intensity: shading.intensity,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.time,
            self.speed,
            self.noise_density,
            self.noise_strength,
            self.frequency,
            self.amplitude,
            self.intensity,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Everything animated between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub mesh: MaterialState,
    pub particles: MaterialState,
    /// Smoothed pointer after this frame's interpolation.
    pub smoothed: Vec2,
    /// Scene root Euler rotation (x, y, z).
    pub rotation: Vec3,
}

impl FrameUniforms {
    /// Values before the first frame runs.
    pub fn initial(shading: &ShadingSettings) -> Self {
        Self {
            mesh: MaterialState::new(shading, MESH_START_TIME),
            particles: MaterialState::new(shading, 0.0),
            smoothed: Vec2::zero(),
            rotation: [0.0; 3],
        }
    }
}

/// Inputs of one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    /// Scene clock, seconds since the scene started.
    pub elapsed: f32,
    /// Duration of the frame being produced, seconds.
    pub dt: f32,
    /// Latest normalized pointer position.
    pub pointer: Vec2,
}

/// Produces the next frame's uniforms from the previous ones.
pub fn step_frame(
    inputs: &FrameInputs,
    settings: &SceneSettings,
    previous: &FrameUniforms,
) -> FrameUniforms {
    let raw = inputs.pointer.clamp(-1.0, 1.0);
    let k = settings.damping.factor_for(inputs.dt);
    let smoothed = Vec2::new(
        damp(previous.smoothed.x, raw.x, k),
        damp(previous.smoothed.y, raw.y, k),
    );

    let tween = settings.tween_factor.factor_for(inputs.dt);

    let mut mesh = previous.mesh;
    mesh.time = inputs.elapsed;
    mesh.amplitude = damp(mesh.amplitude, smoothed.x / 2.0 + 0.5, tween);
    mesh.noise_strength = damp(mesh.noise_strength, smoothed.y / 2.0 + 0.7, tween);

    let mut particles = previous.particles;
    particles.time = inputs.elapsed;
    particles.noise_strength = smoothed.y;

    FrameUniforms {
        mesh,
        particles,
        smoothed,
        rotation: [smoothed.y * ROTATION_SCALE, smoothed.x * ROTATION_SCALE, 0.0],
    }
}

// ── GPU layout ─────────────────────────────────────────────────────────────

/// Material uniform block (160 bytes):
///
///  offset   0  mvp             mat4x4<f32>
///  offset  64  model           mat4x4<f32>
///  offset 128  time .. intensity  7 × f32
///  offset 156  _pad            f32
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct MaterialUniforms {
    pub mvp: Mat4,
    pub model: Mat4,
    pub time: f32,
    pub speed: f32,
    pub noise_density: f32,
    pub noise_strength: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub intensity: f32,
    pub _pad: f32,
}

impl MaterialUniforms {
    pub fn new(state: &MaterialState, mvp: Mat4, model: Mat4) -> Self {
        Self {
            mvp,
            model,
            time: state.time,
            speed: state.speed,
            noise_density: state.noise_density,
            noise_strength: state.noise_strength,
            frequency: state.frequency,
            amplitude: state.amplitude,
            intensity: state.intensity,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn run(settings: &SceneSettings, pointer: Vec2, frames: u32) -> FrameUniforms {
        let mut u = FrameUniforms::initial(&settings.shading);
        for i in 0..frames {
            let inputs = FrameInputs {
                elapsed: (i + 1) as f32 * DT,
                dt: DT,
                pointer,
            };
            u = step_frame(&inputs, settings, &u);
        }
        u
    }

    #[test]
    fn uniform_block_is_160_bytes() {
        assert_eq!(std::mem::size_of::<MaterialUniforms>(), 160);
    }

    #[test]
    fn initial_times() {
        let u = FrameUniforms::initial(&ShadingSettings::default());
        assert_eq!(u.mesh.time, 2.0);
        assert_eq!(u.particles.time, 0.0);
        assert_eq!(u.mesh.amplitude, 6.0);
    }

    #[test]
    fn both_materials_get_elapsed_time() {
        let u = run(&SceneSettings::default(), Vec2::zero(), 3);
        assert!((u.mesh.time - 3.0 * DT).abs() < 1e-6);
        assert_eq!(u.mesh.time, u.particles.time);
    }

    #[test]
    fn centred_pointer_trends_to_rest_values() {
        let u = run(&SceneSettings::default(), Vec2::zero(), 600);
        assert!((u.mesh.amplitude - 0.5).abs() < 1e-3);
        assert!((u.mesh.noise_strength - 0.7).abs() < 1e-3);
        assert_eq!(u.particles.noise_strength, 0.0);
        assert_eq!(u.rotation, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn first_step_smooths_by_point_three() {
        let settings = SceneSettings::default();
        let u = step_frame(
            &FrameInputs { elapsed: DT, dt: DT, pointer: Vec2::new(1.0, -1.0) },
            &settings,
            &FrameUniforms::initial(&settings.shading),
        );
        assert!((u.smoothed.x - 0.3).abs() < 1e-5);
        assert!((u.smoothed.y + 0.3).abs() < 1e-5);
        // Particle noise follows the smoothed pointer immediately.
        assert_eq!(u.particles.noise_strength, u.smoothed.y);
        assert!((u.rotation[0] - u.smoothed.y * ROTATION_SCALE).abs() < 1e-7);
        assert!((u.rotation[1] - u.smoothed.x * ROTATION_SCALE).abs() < 1e-7);
    }

    #[test]
    fn uniforms_stay_bounded_once_settled() {
        let settings = SceneSettings::default();
        let corners = [
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(5.0, -7.0),
            Vec2::new(0.2, 0.9),
        ];
        let mut u = run(&settings, Vec2::zero(), 600);
        for (i, p) in corners.iter().cycle().take(400).enumerate() {
            let inputs = FrameInputs { elapsed: i as f32 * DT, dt: DT, pointer: *p };
            u = step_frame(&inputs, &settings, &u);

            assert!((-1.0..=1.0).contains(&u.smoothed.x));
            assert!((-1.0..=1.0).contains(&u.smoothed.y));
            assert!((0.0..=1.0).contains(&u.mesh.amplitude));
            assert!((0.2..=1.2).contains(&u.mesh.noise_strength));
            assert!((-1.0..=1.0).contains(&u.particles.noise_strength));
            assert!(u.rotation[0].abs() <= ROTATION_SCALE && u.rotation[1].abs() <= ROTATION_SCALE);
        }
    }

    #[test]
    fn default_smoothing_is_point_three_at_any_frame_rate() {
        let settings = SceneSettings::default();
        let prev = FrameUniforms::initial(&settings.shading);
        for dt in [1.0 / 144.0, 1.0 / 30.0, 0.1] {
            let u = step_frame(
                &FrameInputs { elapsed: dt, dt, pointer: Vec2::new(1.0, 0.0) },
                &settings,
                &prev,
            );
            assert!((u.smoothed.x - 0.3).abs() < 1e-6, "dt {dt}: {}", u.smoothed.x);
        }
    }

    #[test]
    fn time_normalized_mode_scales_with_frame_time() {
        let mut settings = SceneSettings::default();
        settings.damping = crate::damping::Damping::TimeNormalized { factor: 0.3, reference_hz: 60.0 };
        let prev = FrameUniforms::initial(&settings.shading);
        let fast = step_frame(
            &FrameInputs { elapsed: 1.0 / 144.0, dt: 1.0 / 144.0, pointer: Vec2::new(1.0, 0.0) },
            &settings,
            &prev,
        );
        assert!(fast.smoothed.x > 0.0 && fast.smoothed.x < 0.3);
    }
}
