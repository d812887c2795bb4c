//! Time source for task creation timestamps.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::fmt;

/// Supplies `created_at` values to the task store.
pub trait Clock: fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that starts at a base instant and advances by a fixed
/// step on every reading.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    #[must_use]
    pub const fn new(base: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Cell::new(base),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.next.get();
        self.next.set(current + self.step);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, SteppingClock};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn stepping_clock_advances_per_read() {
        let base = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let clock = SteppingClock::new(base, Duration::seconds(5));
        assert_eq!(clock.now(), base);
        assert_eq!(clock.now(), base + Duration::seconds(5));
        assert_eq!(clock.now(), base + Duration::seconds(10));
    }
}
