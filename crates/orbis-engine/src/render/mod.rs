//! GPU rendering contracts.
//!
//! Renderers receive a `RenderCtx` (device, queue, formats, viewport) and a
//! `RenderTarget` (encoder + color view) for the current frame. Each renderer owns
//! its GPU resources and creates them lazily on first use.

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
