//! Scene configuration.
//!
//! Every struct implements `Default` with the values the scene ships with and
//! deserializes with `#[serde(default)]`, so a settings file only needs the
//! keys it changes:
//!
//! ```toml
//! tween_factor = 0.15
//!
//! [shading]
//! intensity = 5.0
//!
//! [damping]
//! mode = "per-frame"
//! factor = 0.3
//! ```

use serde::Deserialize;

use crate::damping::Damping;

/// Initial values of the shader material uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShadingSettings {
    pub speed: f32,
    pub density: f32,
    pub strength: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub intensity: f32,
}

impl Default for ShadingSettings {
    fn default() -> Self {
        Self {
            speed: 0.2,
            density: 1.5,
            strength: 0.2,
            frequency: 3.0,
            amplitude: 6.0,
            intensity: 7.0,
        }
    }
}

/// Orbit control limits and speeds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub enabled: bool,
    pub rotate_speed: f32,
    /// Dolly factor per wheel line is `0.95^zoom_speed`.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.5,
            max_distance: 50.0,
        }
    }
}

/// Full scene configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub shading: ShadingSettings,
    pub orbit: OrbitSettings,

    /// Pointer smoothing.
    pub damping: Damping,
    /// Easing applied to the mesh amplitude and noise strength.
    pub tween_factor: Damping,

    /// Upper bound for the render scale (device pixel ratio).
    pub pixel_ratio_cap: f32,
    /// `0xRRGGBB`, sRGB.
    pub clear_color: u32,

    pub mesh_radius: f32,
    pub mesh_detail: u32,
    pub particle_count: u32,
    pub particle_radius: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            shading: ShadingSettings::default(),
            orbit: OrbitSettings::default(),
            damping: Damping::default(),
            tween_factor: Damping::PerFrame { factor: 0.1 },
            pixel_ratio_cap: 1.0,
            clear_color: 0x0a273a,
            mesh_radius: 2.0,
            mesh_detail: 96,
            particle_count: 7000,
            particle_radius: 2.5,
        }
    }
}
