//! Inverse kinematics
//!
//! Solvers pose an [`ArmChain`] toward a target once per frame. The default
//! [`FollowSolver`] is a single-pass heuristic: it does not iterate and it
//! does not clamp unreachable targets, so the tip may trail the target.

use crate::arm::ArmChain;
use crate::math::DVec2;

/// Poses a chain toward a target.
///
/// Implementations must leave the chain anchored and connected.
pub trait IkSolver {
    fn solve(&mut self, chain: &mut ArmChain, target: DVec2);
}

/// Backward follow sweep, re-anchor, forward sweep.
///
/// Each frame starts from the previous frame's joints, which is what keeps
/// the motion smooth without interpolating angles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowSolver;

impl IkSolver for FollowSolver {
    fn solve(&mut self, chain: &mut ArmChain, target: DVec2) {
        let anchor = chain.anchor();
        let segments = chain.segments_mut();
        let Some(last) = segments.len().checked_sub(1) else {
            return;
        };

        // Backward: last segment chases the target, each earlier one chases
        // the base of its successor.
        segments[last].reach(target);
        for i in (0..last).rev() {
            let next_base = segments[i + 1].base;
            segments[i].reach(next_base);
        }

        // Re-anchor, keeping orientations, and propagate outward.
        segments[0].base = anchor;
        for i in 0..last {
            segments[i + 1].base = segments[i].tip();
        }
    }
}
