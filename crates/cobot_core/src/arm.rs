//! Arm chain geometry
//!
//! The chain is an ordered run of rigid segments. Segment 0 sits on the
//! fixed anchor; the last segment carries the tool. Only the IK solver moves
//! segments, and connectivity is guaranteed after each solve, not before.

use crate::error::ConfigError;
use crate::math::{polar, DVec2};

/// One rigid link of the arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Base joint position
    pub base: DVec2,
    /// Orientation in radians, 0 pointing along +x
    pub angle: f64,
    pub length: f64,
}

impl Segment {
    pub fn new(base: DVec2, length: f64) -> Self {
        Self {
            base,
            angle: 0.0,
            length,
        }
    }

    /// Free end of the segment.
    #[inline]
    pub fn tip(&self) -> DVec2 {
        polar(self.base, self.angle, self.length)
    }

    /// Point the segment at `target` and slide its base back so the tip lands on it.
    #[inline]
    pub fn reach(&mut self, target: DVec2) {
        let delta = target - self.base;
        self.angle = delta.y.atan2(delta.x);
        self.base = polar(target, self.angle, -self.length);
    }
}

/// Anchored chain of segments posed toward a target every frame
#[derive(Debug, Clone, PartialEq)]
pub struct ArmChain {
    anchor: DVec2,
    segments: Vec<Segment>,
    total_reach: f64,
}

impl ArmChain {
    /// Build a chain in its rest pose: every base on the anchor's vertical,
    /// `spacing` apart, all angles zero.
    pub fn new(anchor: DVec2, lengths: &[f64], spacing: f64) -> Result<Self, ConfigError> {
        let mut chain = Self {
            anchor,
            segments: Vec::with_capacity(lengths.len()),
            total_reach: 0.0,
        };
        chain.reset(anchor, lengths, spacing)?;
        Ok(chain)
    }

    /// Re-anchor and return to the rest pose with new segment lengths.
    pub fn reset(&mut self, anchor: DVec2, lengths: &[f64], spacing: f64) -> Result<(), ConfigError> {
        if lengths.is_empty() {
            return Err(ConfigError::EmptyChain { layout: "arm" });
        }
        if let Some((index, &length)) = lengths
            .iter()
            .enumerate()
            .find(|(_, l)| !(l.is_finite() && **l > 0.0))
        {
            return Err(ConfigError::InvalidLength {
                layout: "arm",
                index,
                length,
            });
        }

        self.anchor = anchor;
        self.segments.clear();
        self.segments.extend(lengths.iter().enumerate().map(|(i, &length)| {
            Segment::new(DVec2::new(anchor.x, anchor.y - i as f64 * spacing), length)
        }));
        self.total_reach = lengths.iter().sum();
        Ok(())
    }

    pub fn anchor(&self) -> DVec2 {
        self.anchor
    }

    pub fn total_reach(&self) -> f64 {
        self.total_reach
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End-effector position.
    pub fn tip(&self) -> DVec2 {
        self.segments
            .last()
            .map(Segment::tip)
            .unwrap_or(self.anchor)
    }

    /// Largest gap between a segment's tip and the next segment's base,
    /// including the anchor-to-first-base gap.
    pub fn connectivity_error(&self) -> f64 {
        let first = self
            .segments
            .first()
            .map_or(0.0, |s| s.base.distance(self.anchor));
        self.segments
            .windows(2)
            .map(|pair| pair[0].tip().distance(pair[1].base))
            .fold(first, f64::max)
    }
}
