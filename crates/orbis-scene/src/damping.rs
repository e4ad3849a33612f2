//! Per-frame interpolation.
//!
//! Pointer smoothing and the mesh uniform easing both go through [`damp`];
//! [`Damping`] decides how much of the remaining distance one frame covers.

use serde::Deserialize;

/// Moves `current` toward `target` by `factor` of the remaining distance.
///
/// `factor` is clamped to `[0, 1]`, so the result always lies between
/// `current` and `target`.
#[inline]
pub fn damp(current: f32, target: f32, factor: f32) -> f32 {
    let t = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    current + (target - current) * t
}

/// How a damping factor scales with frame time.
///
/// Defaults to a fixed 0.3 per frame; `TimeNormalized` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Damping {
    /// The same fraction every frame, whatever the frame rate.
    PerFrame { factor: f32 },

    /// `factor` per frame at `reference_hz`; other frame times get the
    /// equivalent exponential decay, `1 - (1 - factor)^(dt * reference_hz)`.
    TimeNormalized { factor: f32, reference_hz: f32 },
}

impl Default for Damping {
    fn default() -> Self {
        Damping::PerFrame { factor: 0.3 }
    }
}

impl Damping {
    /// Interpolation fraction for a frame lasting `dt` seconds, in `[0, 1]`.
    pub fn factor_for(self, dt: f32) -> f32 {
        let f = match self {
            Damping::PerFrame { factor } => factor,
            Damping::TimeNormalized { factor, reference_hz } => {
                let frames = (dt * reference_hz).max(0.0);
                1.0 - (1.0 - factor.clamp(0.0, 1.0)).powf(frames)
            }
        };
        if f.is_finite() { f.clamp(0.0, 1.0) } else { 0.0 }
    }
}
