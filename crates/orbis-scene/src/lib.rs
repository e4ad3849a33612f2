//! Orbis scene.
//!
//! A noise-displaced icosphere inside a Fibonacci-sphere particle field,
//! reacting to the pointer with smoothed uniforms and a slight parallax tilt.
//!
//! [`SceneController`] owns one instance for its whole lifecycle: it mounts
//! on a [`Mount`], receives resize and pointer events from the host, advances
//! its animation once per pending frame and renders through a two-pass
//! composer. Everything except [`SceneController::render`] runs without a GPU.

pub mod camera;
pub mod controls;
pub mod damping;
pub mod frame_loop;
pub mod geometry;
pub mod listeners;
pub mod math;
pub mod pointer;
pub mod render;
pub mod settings;
pub mod uniforms;

mod controller;
mod error;
mod mount;

pub use controller::{Lifecycle, SceneController};
pub use error::SceneError;
pub use mount::Mount;
pub use settings::{OrbitSettings, SceneSettings, ShadingSettings};
