//! Simulation time
//!
//! The simulation never reads the wall clock. Hosts pass a monotonically
//! increasing `Duration` into every step; headless drivers and tests advance
//! a [`SimulationTime`] by the reference frame period instead.

use std::time::Duration;

/// Reference display refresh rate (60 Hz = 16.666ms per frame)
pub const FRAME_RATE_HZ: u32 = 60;
pub const REFERENCE_FRAME: Duration = Duration::from_micros(16_666); // ~16.666ms

/// Frame counter plus elapsed time since the simulation started
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationTime {
    frame_count: u64,
    elapsed: Duration,
}

impl SimulationTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Time since start as of the most recent frame.
    pub fn now(&self) -> Duration {
        self.elapsed
    }

    /// Advance by a fixed frame period and return the new timestamp.
    pub fn advance(&mut self, period: Duration) -> Duration {
        self.frame_count += 1;
        self.elapsed += period;
        self.elapsed
    }

    /// Move to a host-supplied timestamp. Earlier timestamps are ignored so
    /// time never runs backwards.
    pub fn advance_to(&mut self, now: Duration) -> Duration {
        self.frame_count += 1;
        self.elapsed = self.elapsed.max(now);
        self.elapsed
    }
}
