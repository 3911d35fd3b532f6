use crate::arm::ArmChain;
use crate::config::BehaviorConfig;
use crate::math::{polar, sample, DVec2};
use rand::Rng;
use std::f64::consts::PI;

/// Choose a comfortable weld point above the anchor.
///
/// The radius stays between `reach_min` and `reach_max` of the total reach so
/// the arm is never fully folded or fully straight, and the angle sweeps the
/// upper half-plane while keeping `arc_margin` away from the horizon.
pub fn pick_idle_target<R: Rng + ?Sized>(
    chain: &ArmChain,
    config: &BehaviorConfig,
    rng: &mut R,
) -> DVec2 {
    let total = chain.total_reach();
    let reach = sample(rng, config.reach_min * total..config.reach_max * total);
    let angle = sample(rng, -(PI - config.arc_margin)..-config.arc_margin);
    polar(chain.anchor(), angle, reach)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn idle_targets_stay_in_the_bent_upper_arc() {
        let chain = ArmChain::new(DVec2::new(500.0, 800.0), &[130.0, 110.0, 90.0, 70.0], 50.0)
            .unwrap();
        let config = BehaviorConfig::default();
        let mut rng = StdRng::seed_from_u64(0xC0B07);

        for _ in 0..2000 {
            let point = pick_idle_target(&chain, &config, &mut rng);
            let offset = point - chain.anchor();
            let radius = offset.length();
            assert!(radius >= 120.0 - 1e-9 && radius < 340.0 + 1e-9, "radius {radius}");

            let angle = offset.y.atan2(offset.x);
            assert!(angle < -0.2 + 1e-9 && angle >= -(PI - 0.2) - 1e-9, "angle {angle}");
            assert!(point.y < chain.anchor().y);
        }
    }

    #[test]
    fn same_seed_same_target() {
        let chain = ArmChain::new(DVec2::new(0.0, 0.0), &[10.0, 10.0], 5.0).unwrap();
        let config = BehaviorConfig::default();
        let a = pick_idle_target(&chain, &config, &mut StdRng::seed_from_u64(3));
        let b = pick_idle_target(&chain, &config, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
