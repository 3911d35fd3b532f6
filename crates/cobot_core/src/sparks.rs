//! Weld spark particles
//!
//! Sparks are plain ballistic points integrated once per frame with a fixed
//! step. Life drains at a constant rate regardless of `max_life`; `max_life`
//! only shifts where a spark sits on the colour ramp.

use crate::config::SparkConfig;
use crate::math::DVec2;

/// Colour band a spark falls into, hottest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkBand {
    WhiteHot,
    Glowing,
    Cooling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub position: DVec2,
    /// Position before the last update, for drawing a streak
    pub previous: DVec2,
    pub velocity: DVec2,
    pub life: f64,
    pub max_life: f64,
}

impl Spark {
    pub fn new(position: DVec2, velocity: DVec2, max_life: f64) -> Self {
        Self {
            position,
            previous: position,
            velocity,
            life: 1.0,
            max_life,
        }
    }

    /// `life / max_life`; can exceed 1 for short-lived sparks.
    pub fn heat(&self) -> f64 {
        self.life / self.max_life
    }

    pub fn band(&self) -> SparkBand {
        let heat = self.heat();
        if heat > 0.7 {
            SparkBand::WhiteHot
        } else if heat > 0.3 {
            SparkBand::Glowing
        } else {
            SparkBand::Cooling
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// One fixed step: move, apply gravity and drag, drain life, then
    /// clamp-and-reflect against the ground line.
    pub fn integrate(&mut self, config: &SparkConfig, ground_y: f64) {
        self.previous = self.position;
        self.position += self.velocity;
        self.velocity.y += config.gravity;
        self.velocity.x *= config.drag_x;
        self.velocity.y *= config.drag_y;
        self.life -= config.decay;

        if self.position.y > ground_y {
            self.position.y = ground_y;
            self.velocity.y *= -config.restitution;
            self.velocity.x *= config.ground_friction;
        }
    }
}

/// Unordered set of live sparks
#[derive(Debug, Clone, Default)]
pub struct SparkPool {
    sparks: Vec<Spark>,
}

impl SparkPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, position: DVec2, velocity: DVec2, max_life: f64) {
        self.sparks.push(Spark::new(position, velocity, max_life));
    }

    /// Integrate every spark and drop the ones whose life ran out.
    ///
    /// `retain_mut` compacts in place, so no survivor is skipped.
    pub fn update(&mut self, config: &SparkConfig, ground_y: f64) {
        self.sparks.retain_mut(|spark| {
            spark.integrate(config, ground_y);
            spark.is_alive()
        });
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn as_slice(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spark> {
        self.sparks.iter()
    }

    pub fn clear(&mut self) {
        self.sparks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f64 = 800.0;

    fn steps_until_removed(max_life: f64) -> usize {
        let config = SparkConfig::default();
        let mut pool = SparkPool::new();
        pool.emit(DVec2::new(0.0, 0.0), DVec2::new(1.0, -3.0), max_life);
        let mut steps = 0;
        while !pool.is_empty() {
            pool.update(&config, GROUND);
            steps += 1;
            assert!(steps <= 100, "spark never died");
        }
        steps
    }

    #[test]
    fn spark_lives_exactly_fifty_steps_regardless_of_max_life() {
        assert_eq!(steps_until_removed(0.5), 50);
        assert_eq!(steps_until_removed(0.9), 50);
        assert_eq!(steps_until_removed(1.29), 50);
    }

    #[test]
    fn integration_applies_gravity_then_drag() {
        let config = SparkConfig::default();
        let mut spark = Spark::new(DVec2::new(10.0, 10.0), DVec2::new(2.0, -4.0), 1.0);
        spark.integrate(&config, GROUND);

        assert_eq!(spark.previous, DVec2::new(10.0, 10.0));
        assert_eq!(spark.position, DVec2::new(12.0, 6.0));
        assert!((spark.velocity.x - 2.0 * 0.94).abs() < 1e-12);
        assert!((spark.velocity.y - (-4.0 + 0.3) * 0.96).abs() < 1e-12);
        assert!((spark.life - 0.98).abs() < 1e-12);
    }

    #[test]
    fn ground_contact_clamps_and_reflects() {
        let config = SparkConfig::default();
        let mut spark = Spark::new(DVec2::new(0.0, GROUND - 1.0), DVec2::new(5.0, 6.0), 1.0);
        spark.integrate(&config, GROUND);

        let vy_before_contact = (6.0 + 0.3) * 0.96;
        assert_eq!(spark.position.y, GROUND);
        assert!((spark.velocity.y + vy_before_contact * 0.3).abs() < 1e-12);
        assert!(spark.velocity.y < 0.0);
        assert!((spark.velocity.x - 5.0 * 0.94 * 0.7).abs() < 1e-12);
    }

    #[test]
    fn airborne_spark_is_not_reflected() {
        let config = SparkConfig::default();
        let mut spark = Spark::new(DVec2::new(0.0, 100.0), DVec2::new(0.0, 6.0), 1.0);
        spark.integrate(&config, GROUND);
        assert!(spark.velocity.y > 0.0);
        assert_eq!(spark.position.y, 106.0);
    }

    #[test]
    fn removal_keeps_every_survivor() {
        let config = SparkConfig::default();
        let mut pool = SparkPool::new();
        for i in 0..10 {
            pool.emit(DVec2::new(i as f64, 0.0), DVec2::ZERO, 1.0);
        }
        // Age alternate sparks to the brink so they die on the next update.
        for spark in pool.sparks.iter_mut().step_by(2) {
            spark.life = 0.01;
        }
        pool.update(&config, GROUND);

        assert_eq!(pool.len(), 5);
        let xs: Vec<f64> = pool.iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn max_life_shifts_colour_band() {
        let long_lived = Spark {
            life: 0.6,
            ..Spark::new(DVec2::ZERO, DVec2::ZERO, 1.3)
        };
        let short_lived = Spark {
            life: 0.6,
            ..Spark::new(DVec2::ZERO, DVec2::ZERO, 0.5)
        };
        assert_eq!(long_lived.band(), SparkBand::Glowing);
        assert_eq!(short_lived.band(), SparkBand::WhiteHot);

        let dying = Spark {
            life: 0.1,
            ..Spark::new(DVec2::ZERO, DVec2::ZERO, 1.0)
        };
        assert_eq!(dying.band(), SparkBand::Cooling);
    }
}
