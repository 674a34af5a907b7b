//! Settle delay before derived visuals are recomputed after a drag.
//!
//! Deadline-based rather than callback-based: the host passes its own clock
//! readings, so the timer works under any event loop (or none, in tests).

use std::time::{Duration, Instant};

/// Default settle delay.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(200);

/// A single resettable deadline.
#[derive(Debug, Clone)]
pub struct SettleTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for SettleTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE)
    }
}

impl SettleTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)start the delay from `now`. An earlier deadline is superseded.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
