/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering resumes next frame.
    Reconfigured,
    /// Transient error; the current frame is dropped.
    SkipFrame,
    /// Unrecoverable (commonly OOM); the window should close.
    Fatal,
}
