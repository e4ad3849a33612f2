/// Identifies one scheduled frame request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Cancellable chain of frame requests.
///
/// At most one request is pending at a time. The host runs a frame only while
/// a request is pending; the frame consumes it and schedules the next one.
/// Once cancelled the loop never schedules again.
#[derive(Debug, Default)]
pub struct FrameLoop {
    next_id: u64,
    pending: Option<FrameHandle>,
    cancelled: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the next frame. Returns the pending handle, or `None` after
    /// cancellation.
    pub fn schedule(&mut self) -> Option<FrameHandle> {
        if self.cancelled {
            return None;
        }
        if self.pending.is_none() {
            self.pending = Some(FrameHandle(self.next_id));
            self.next_id += 1;
        }
        self.pending
    }

    /// Consumes the pending request when its frame starts running.
    pub fn take(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Drops the pending request and stops the loop for good.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        self.cancelled = true;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_idempotent_until_taken() {
        let mut fl = FrameLoop::new();
        let a = fl.schedule();
        assert_eq!(fl.schedule(), a);
        assert_eq!(fl.take(), a);
        assert!(!fl.is_pending());
        assert_ne!(fl.schedule(), a);
    }

    #[test]
    fn cancel_is_final() {
        let mut fl = FrameLoop::new();
        let h = fl.schedule();
        assert_eq!(fl.cancel(), h);
        assert!(fl.schedule().is_none());
        assert!(!fl.is_pending());
        assert!(fl.cancel().is_none());
    }
}
