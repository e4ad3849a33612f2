//! Time subsystem.
//!
//! Frame timing utilities, decoupled from the runtime so they can be tested alone.
//! - one `FrameClock` per window
//! - call `tick()` once per presented frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
