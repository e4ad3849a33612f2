//! Paint model shared between the site and the scene renderer.
//!
//! Scope: colour representation (linear, premultiplied alpha).

pub mod color;

pub use color::Color;
