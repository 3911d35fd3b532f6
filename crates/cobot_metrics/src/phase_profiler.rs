//! Accumulated timings for the named phases of a frame

use std::time::{Duration, Instant};

/// Per-phase wall time summed since the last reset
///
/// Phases are few and fixed, so a small vector in first-seen order beats a
/// map and keeps report output stable.
#[derive(Default)]
pub struct PhaseProfiler {
    phases: Vec<(&'static str, Duration)>,
    frames: u32,
}

impl PhaseProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_phase<F, R>(&mut self, name: &'static str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        self.add(name, start.elapsed());
        result
    }

    pub fn add(&mut self, name: &'static str, elapsed: Duration) {
        match self.phases.iter_mut().find(|(n, _)| *n == name) {
            Some((_, total)) => *total += elapsed,
            None => self.phases.push((name, elapsed)),
        }
    }

    /// Count one completed frame toward the per-frame averages.
    pub fn end_frame(&mut self) {
        self.frames += 1;
    }

    pub fn total(&self, name: &str) -> Duration {
        self.phases
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, d)| *d)
            .unwrap_or(Duration::ZERO)
    }

    /// Average time per frame spent in `name`.
    pub fn per_frame(&self, name: &str) -> Duration {
        if self.frames == 0 {
            return Duration::ZERO;
        }
        self.total(name) / self.frames
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn reset(&mut self) {
        for (_, total) in &mut self.phases {
            *total = Duration::ZERO;
        }
        self.frames = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.phases.iter().copied()
    }
}
