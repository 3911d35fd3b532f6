//! Planar math utilities
//!
//! Re-exports glam's double-precision vectors plus the few helpers the
//! simulation needs on top of them.

pub use glam::DVec2;

use rand::Rng;
use std::ops::Range;

/// Point at `radius` along `angle` (radians) from `origin`.
#[inline]
pub fn polar(origin: DVec2, angle: f64, radius: f64) -> DVec2 {
    origin + DVec2::from_angle(angle) * radius
}

/// Uniform sample in `[range.start, range.end)`.
///
/// Collapsed ranges return `range.start` instead of panicking, so a config
/// that pins a value (e.g. a fixed spark speed) stays valid.
#[inline]
pub fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range<f64>) -> f64 {
    range.start + rng.gen::<f64>() * (range.end - range.start)
}
