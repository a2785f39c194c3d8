//! Time source for bounded waits.

use std::time::{Duration, Instant};

/// A monotonic clock that can suspend the caller.
pub trait Clock {
    /// Returns the current point in time.
    fn now(&self) -> Instant;

    /// Suspends the caller for the given duration.
    fn sleep(&mut self, duration: Duration);
}

/// The operating system's monotonic clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
