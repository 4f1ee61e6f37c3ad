use std::collections::BTreeSet;
use std::fmt;

/// Handle to a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequestId(pub u64);

impl fmt::Display for FrameRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A display refresh clock.
///
/// Consumers request a frame and get back an id; on each refresh tick the
/// driver calls [`RefreshClock::take_due`] and runs whatever is attached to
/// the returned ids.
pub trait RefreshClock {
    /// Request a callback before the next frame is presented.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Cancel a pending request. Returns false if it already fired, was
    /// already cancelled, or never existed.
    fn cancel_frame(&mut self, id: FrameRequestId) -> bool;

    /// Advance one refresh tick and return the requests due on it, in
    /// request order.
    fn take_due(&mut self) -> Vec<FrameRequestId>;

    /// Number of requests waiting for the next tick.
    fn pending_count(&self) -> usize;
}

/// In-process refresh clock. Each call to [`RefreshClock::take_due`] is one
/// refresh tick; the desktop app calls it once per redraw, tests call it by
/// hand.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: BTreeSet<FrameRequestId>,
    ticks: u64,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh ticks elapsed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_pending(&self, id: FrameRequestId) -> bool {
        self.pending.contains(&id)
    }
}

impl RefreshClock for FrameQueue {
    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id);
        tracing::trace!(%id, "frame requested");
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) -> bool {
        let removed = self.pending.remove(&id);
        if removed {
            tracing::trace!(%id, "frame request cancelled");
        }
        removed
    }

    fn take_due(&mut self) -> Vec<FrameRequestId> {
        self.ticks += 1;
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
