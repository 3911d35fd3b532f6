//! Debounced viewport resizing

use cobot_core::Viewport;
use std::time::Duration;

/// Quiet period after the last resize event before the arm is rebuilt
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Collapses a burst of resize events into a single re-initialisation
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(Viewport, Duration)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_PERIOD)
    }
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a resize at `now`, superseding any pending one.
    pub fn notify(&mut self, viewport: Viewport, now: Duration) {
        self.pending = Some((viewport, now + self.quiet));
    }

    /// Hand out the settled viewport once the quiet period has passed.
    pub fn poll(&mut self, now: Duration) -> Option<Viewport> {
        match self.pending {
            Some((viewport, deadline)) if now >= deadline => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
