//! Pointer activity and the idle gate

use crate::config::BehaviorConfig;
use crate::viewport::Viewport;
use std::time::Duration;

/// Remembers when the pointer last moved far enough to count as activity
#[derive(Debug, Clone, Copy)]
pub struct ActivityMonitor {
    last_activity: Duration,
}

impl ActivityMonitor {
    /// Start the inactivity clock at `now`.
    pub fn new(now: Duration) -> Self {
        Self { last_activity: now }
    }

    pub fn record(&mut self, now: Duration) {
        self.last_activity = now;
    }

    pub fn last_activity(&self) -> Duration {
        self.last_activity
    }

    pub fn inactive_for(&self, now: Duration) -> Duration {
        now.saturating_sub(self.last_activity)
    }

    /// Idle once the timeout has strictly passed, on wide layouts only.
    pub fn is_idle(&self, now: Duration, viewport: &Viewport, config: &BehaviorConfig) -> bool {
        viewport.is_desktop(config.desktop_min_width)
            && self.inactive_for(now) > config.idle_timeout()
    }
}
