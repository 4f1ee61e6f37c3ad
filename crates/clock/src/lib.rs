//! Refresh Clock: the scheduling primitive that drives scene animation.
//!
//! A frame request is a one-shot slot that fires on the next refresh tick.
//! Requests are identified by [`FrameRequestId`] and can be cancelled up to
//! the moment they fire.
//!
//! # Invariants
//! - Ids are never reused by a clock instance.
//! - A request made while a tick is being processed fires on the following tick.
//! - A cancelled request never fires.

mod refresh;
mod timer;

pub use refresh::{FrameQueue, FrameRequestId, RefreshClock};
pub use timer::FrameTimer;

pub fn crate_info() -> &'static str {
    "gallery-clock v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("clock"));
    }
}
