//! Client-side minimum spacing between requests.
//!
//! The service enforces a strict per-call interval (not a budget), so there is no burst
//! allowance: the next dispatch may start only once `min_interval` has elapsed since the
//! previous one finished.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub(crate) struct Throttle {
    min_interval: Duration,
    last_done: Option<Instant>,
}

impl Throttle {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_done: None,
        }
    }

    pub(crate) fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time left before the next dispatch may start.
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        match self.last_done {
            Some(done) => self.min_interval.saturating_sub(now.saturating_duration_since(done)),
            None => Duration::ZERO,
        }
    }

    /// Blocks until the next dispatch may start.
    pub(crate) fn wait(&self) {
        let left = self.remaining(Instant::now());
        if !left.is_zero() {
            #[cfg(feature = "tracing")]
            tracing::trace!(wait = ?left, "throttling request");
            std::thread::sleep(left);
        }
    }

    /// Records that a dispatch just finished, successfully or not.
    pub(crate) fn mark(&mut self) {
        self.last_done = Some(Instant::now());
    }
}
