//! Cobot Metrics - frame timing and per-phase profiling
//!
//! Provides zero-cost abstractions for metrics collection that completely
//! vanish in production builds via feature flags.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable metrics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use cobot_metrics::{FrameTimer, PhaseProfiler};
//!
//! let mut timer = FrameTimer::new(120);
//! let mut profiler = PhaseProfiler::new();
//! timer.begin();
//! profiler.time_phase("simulate", || sim.step(input));
//! timer.end();
//! ```
//!
//! Without the `metrics` feature every type below is an empty stub.

#[cfg(feature = "metrics")]
mod frame_timer;
#[cfg(feature = "metrics")]
mod phase_profiler;
#[cfg(feature = "metrics")]
mod report;
#[cfg(feature = "metrics")]
mod ring_buffer;

#[cfg(feature = "metrics")]
pub use frame_timer::FrameTimer;
#[cfg(feature = "metrics")]
pub use phase_profiler::PhaseProfiler;
#[cfg(feature = "metrics")]
pub use report::ReportClock;
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;

/// Whether this build collects metrics.
pub const ENABLED: bool = cfg!(feature = "metrics");

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct FrameTimer;

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new(_capacity: usize) -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn record(&mut self, _frame_time: std::time::Duration) {}
    pub fn fps(&self) -> f64 { 0.0 }
    pub fn frame_time_ms(&self) -> f64 { 0.0 }
    pub fn frame_time_range_ms(&self) -> (f64, f64) { (0.0, 0.0) }
}

#[cfg(not(feature = "metrics"))]
#[derive(Default)]
pub struct PhaseProfiler;

#[cfg(not(feature = "metrics"))]
impl PhaseProfiler {
    pub fn new() -> Self { Self }
    pub fn time_phase<F, R>(&mut self, _name: &'static str, f: F) -> R where F: FnOnce() -> R { f() }
    pub fn add(&mut self, _name: &'static str, _elapsed: std::time::Duration) {}
    pub fn end_frame(&mut self) {}
    pub fn total(&self, _name: &str) -> std::time::Duration { std::time::Duration::ZERO }
    pub fn per_frame(&self, _name: &str) -> std::time::Duration { std::time::Duration::ZERO }
    pub fn frames(&self) -> u32 { 0 }
    pub fn reset(&mut self) {}
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, std::time::Duration)> + '_ { std::iter::empty() }
}

#[cfg(not(feature = "metrics"))]
pub struct ReportClock;

#[cfg(not(feature = "metrics"))]
impl ReportClock {
    pub fn new(_interval: std::time::Duration) -> Self { Self }
    pub fn due(&mut self) -> bool { false }
}
