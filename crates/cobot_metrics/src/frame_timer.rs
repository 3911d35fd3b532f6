//! Wall-clock frame timing for the periodic stats report
//!
//! The runtime brackets each redraw (sample, step, tessellate, present) with
//! [`FrameTimer::begin`]/[`FrameTimer::end`]; the report line reads the
//! rolling average, the derived rate and the worst spike in the window.

use super::ring_buffer::RingBuffer;
use std::time::{Duration, Instant};

pub struct FrameTimer {
    started: Instant,
    window: RingBuffer<Duration>,
}

impl FrameTimer {
    /// Keep the last `capacity` frames; the runtime uses two seconds at 60 Hz.
    pub fn new(capacity: usize) -> Self {
        Self {
            started: Instant::now(),
            window: RingBuffer::new(capacity),
        }
    }

    pub fn begin(&mut self) {
        self.started = Instant::now();
    }

    pub fn end(&mut self) {
        self.record(self.started.elapsed());
    }

    /// Push a frame time measured elsewhere, e.g. by a headless driver.
    pub fn record(&mut self, frame_time: Duration) {
        self.window.push(frame_time);
    }

    /// Frames per second implied by the average; zero before the first frame.
    pub fn fps(&self) -> f64 {
        match self.window.average().as_secs_f64() {
            avg if avg > 0.0 => avg.recip(),
            _ => 0.0,
        }
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        as_ms(self.window.average())
    }

    /// Fastest and slowest frame in the window, in milliseconds.
    pub fn frame_time_range_ms(&self) -> (f64, f64) {
        let (min, max) = self.window.min_max();
        (as_ms(min), as_ms(max))
    }
}

fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_from_recorded_frames() {
        let mut timer = FrameTimer::new(4);
        assert_eq!(timer.fps(), 0.0);
        for _ in 0..4 {
            timer.record(Duration::from_millis(20));
        }
        assert!((timer.fps() - 50.0).abs() < 1e-9);
        assert!((timer.frame_time_ms() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn range_tracks_spikes() {
        let mut timer = FrameTimer::new(8);
        timer.record(Duration::from_millis(16));
        timer.record(Duration::from_millis(48));
        timer.record(Duration::from_millis(16));
        let (min, max) = timer.frame_time_range_ms();
        assert!((min - 16.0).abs() < 1e-9);
        assert!((max - 48.0).abs() < 1e-9);
    }
}
