//! Periodic report gate

use std::time::{Duration, Instant};

/// Says when enough time has passed to emit another metrics summary
pub struct ReportClock {
    interval: Duration,
    last: Instant,
}

impl ReportClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// True at most once per interval.
    pub fn due(&mut self) -> bool {
        self.due_at(Instant::now())
    }

    pub fn due_at(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}
