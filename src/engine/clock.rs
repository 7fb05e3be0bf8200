//! Clock abstraction for the round drivers.
//!
//! The counting loop is the only suspension point in the engine. Putting
//! the sleep behind a trait lets production drivers block on a real timer
//! while tests drive whole rounds instantly and assert on the requested
//! delays.

use std::time::Duration;

/// A source of delay for the round drivers.
pub trait Clock {
    /// Block for `duration` (or pretend to).
    fn sleep(&mut self, duration: Duration);
}

/// Real wall-clock sleeping via `std::thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual clock that records requested sleeps and returns immediately.
///
/// Lets tests run full rounds without wall-clock delays and verify the
/// cadence the engine asked for.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    /// Every sleep requested, in order.
    pub slept: Vec<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time elapsed.
    #[must_use]
    pub fn total_slept(&self) -> Duration {
        self.slept.iter().sum()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_records() {
        let mut clock = ManualClock::new();
        clock.sleep(Duration::from_millis(100));
        clock.sleep(Duration::from_millis(250));

        assert_eq!(clock.slept.len(), 2);
        assert_eq!(clock.total_slept(), Duration::from_millis(350));
    }
}
