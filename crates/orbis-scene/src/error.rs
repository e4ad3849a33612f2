use thiserror::Error;

/// Errors raised by the scene controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// The mount has no usable area (zero, negative or non-finite size).
    #[error("cannot mount a scene on a {width}x{height} area")]
    DegenerateMount { width: f32, height: f32 },

    /// The controller has already been cleaned up.
    #[error("scene has been disposed")]
    Disposed,
}
