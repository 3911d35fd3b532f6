//! Tunable simulation constants
//!
//! Every default here is the reference behaviour; hosts may override any
//! subset through a settings file since all structs use `#[serde(default)]`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::Duration;

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub arm: ArmConfig,
    pub behavior: BehaviorConfig,
    pub sparks: SparkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Segment lengths, anchor first, on wide viewports
    pub desktop_lengths: Vec<f64>,
    /// Segment lengths on compact viewports
    pub compact_lengths: Vec<f64>,
    /// Vertical spacing of segment bases above the anchor at (re)initialisation
    pub rest_spacing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Pointer travel between two events that counts as activity (px)
    pub activity_threshold: f64,
    pub idle_timeout_ms: u64,
    /// Viewports at or below this width never go idle
    pub desktop_min_width: f64,
    pub pursuit_easing: f64,
    pub idle_easing: f64,
    pub weld_easing: f64,
    /// Target-to-idle-target distance that starts a weld (px)
    pub arrival_radius: f64,
    pub weld_dwell_min_ms: u64,
    pub weld_dwell_max_ms: u64,
    /// Chance per welding frame of emitting a burst
    pub emit_probability: f64,
    pub sparks_per_burst: usize,
    /// Half-width of the emission cone around +y (radians)
    pub spark_cone: f64,
    pub spark_speed_min: f64,
    pub spark_speed_max: f64,
    /// Idle reach as fractions of total reach
    pub reach_min: f64,
    pub reach_max: f64,
    /// Angular margin kept clear of the horizon on both sides (radians)
    pub arc_margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkConfig {
    pub gravity: f64,
    pub drag_x: f64,
    pub drag_y: f64,
    /// Life lost per update
    pub decay: f64,
    /// Fraction of vertical speed kept (and reversed) on ground contact
    pub restitution: f64,
    /// Horizontal speed kept on ground contact
    pub ground_friction: f64,
    pub max_life_min: f64,
    pub max_life_max: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            desktop_lengths: vec![130.0, 110.0, 90.0, 70.0],
            compact_lengths: vec![70.0, 60.0, 50.0, 40.0],
            rest_spacing: 50.0,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            activity_threshold: 5.0,
            idle_timeout_ms: 2500,
            desktop_min_width: 768.0,
            pursuit_easing: 0.08,
            idle_easing: 0.012,
            weld_easing: 0.1,
            arrival_radius: 5.0,
            weld_dwell_min_ms: 1200,
            weld_dwell_max_ms: 2700,
            emit_probability: 0.6,
            sparks_per_burst: 2,
            spark_cone: 1.0,
            spark_speed_min: 2.0,
            spark_speed_max: 8.0,
            reach_min: 0.3,
            reach_max: 0.85,
            arc_margin: 0.2,
        }
    }
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            drag_x: 0.94,
            drag_y: 0.96,
            decay: 0.02,
            restitution: 0.3,
            ground_friction: 0.7,
            max_life_min: 0.5,
            max_life_max: 1.3,
        }
    }
}

impl ArmConfig {
    /// Segment lengths for the given layout.
    pub fn lengths(&self, desktop: bool) -> &[f64] {
        if desktop {
            &self.desktop_lengths
        } else {
            &self.compact_lengths
        }
    }
}

impl BehaviorConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    pub fn weld_dwell(&self) -> Range<f64> {
        self.weld_dwell_min_ms as f64..self.weld_dwell_max_ms as f64
    }

    pub fn spark_speed(&self) -> Range<f64> {
        self.spark_speed_min..self.spark_speed_max
    }

    pub fn reach(&self) -> Range<f64> {
        self.reach_min..self.reach_max
    }
}

impl SparkConfig {
    pub fn max_life(&self) -> Range<f64> {
        self.max_life_min..self.max_life_max
    }
}

impl SimConfig {
    /// Reject configurations the simulation cannot meaningfully run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_lengths("desktop", &self.arm.desktop_lengths)?;
        validate_lengths("compact", &self.arm.compact_lengths)?;
        positive("rest_spacing", self.arm.rest_spacing)?;

        let b = &self.behavior;
        positive("activity_threshold", b.activity_threshold)?;
        positive("arrival_radius", b.arrival_radius)?;
        unit("pursuit_easing", b.pursuit_easing)?;
        unit("idle_easing", b.idle_easing)?;
        unit("weld_easing", b.weld_easing)?;
        unit("emit_probability", b.emit_probability)?;
        range("weld_dwell", b.weld_dwell())?;
        range("spark_speed", b.spark_speed())?;
        range("reach", b.reach())?;
        unit("reach_max", b.reach_max)?;

        let s = &self.sparks;
        positive("decay", s.decay)?;
        unit("drag_x", s.drag_x)?;
        unit("drag_y", s.drag_y)?;
        unit("restitution", s.restitution)?;
        unit("ground_friction", s.ground_friction)?;
        range("max_life", s.max_life())?;
        Ok(())
    }
}

fn validate_lengths(layout: &'static str, lengths: &[f64]) -> Result<(), ConfigError> {
    if lengths.is_empty() {
        return Err(ConfigError::EmptyChain { layout });
    }
    for (index, &length) in lengths.iter().enumerate() {
        if !(length.is_finite() && length > 0.0) {
            return Err(ConfigError::InvalidLength {
                layout,
                index,
                length,
            });
        }
    }
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitInterval { name, value })
    }
}

fn range(name: &'static str, r: Range<f64>) -> Result<(), ConfigError> {
    if r.start.is_finite() && r.end.is_finite() && r.start >= 0.0 && r.start < r.end {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            name,
            min: r.start,
            max: r.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn desktop_total_reach_is_400() {
        let total: f64 = ArmConfig::default().lengths(true).iter().sum();
        assert_eq!(total, 400.0);
    }

    #[test]
    fn rejects_zero_length_segment() {
        let mut config = SimConfig::default();
        config.arm.compact_lengths[2] = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLength {
                layout: "compact",
                index: 2,
                length: 0.0
            })
        );
    }

    #[test]
    fn rejects_inverted_dwell() {
        let mut config = SimConfig::default();
        config.behavior.weld_dwell_min_ms = 3000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { name: "weld_dwell", .. })
        ));
    }

    #[test]
    fn rejects_empty_chain() {
        let mut config = SimConfig::default();
        config.arm.desktop_lengths.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyChain { layout: "desktop" })
        );
    }
}
