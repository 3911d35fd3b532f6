//! Idle behaviour state machine
//!
//! MOVING eases the target slowly toward a chosen weld point; arriving within
//! `arrival_radius` starts WELDING, which holds the point, throws sparks from
//! the tool tip and returns to MOVING with a fresh point after a random dwell.
//! Pointer activity cancels a weld immediately.

use super::idle_target::pick_idle_target;
use super::tracker::TargetTracker;
use crate::arm::ArmChain;
use crate::config::SimConfig;
use crate::math::{sample, DVec2};
use crate::sparks::SparkPool;
use rand::Rng;
use std::f64::consts::FRAC_PI_2;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleState {
    Moving,
    Welding,
}

/// State changes reported by the machine, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdleTransition {
    /// Target arrived; weld will last `dwell`.
    WeldStarted { dwell: Duration },
    /// Dwell ran out after `elapsed`; heading to `next`.
    WeldFinished { elapsed: Duration, next: DVec2 },
    /// Pointer moved mid-weld; heading to `next`.
    Interrupted { next: DVec2 },
}

#[derive(Debug, Clone)]
pub struct IdleBehavior {
    state: IdleState,
    idle_target: DVec2,
    weld_started: Duration,
    dwell: Duration,
}

impl IdleBehavior {
    pub fn new(idle_target: DVec2) -> Self {
        Self {
            state: IdleState::Moving,
            idle_target,
            weld_started: Duration::ZERO,
            dwell: Duration::ZERO,
        }
    }

    pub fn state(&self) -> IdleState {
        self.state
    }

    pub fn idle_target(&self) -> DVec2 {
        self.idle_target
    }

    /// Dwell chosen for the current weld. Meaningless while moving.
    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    pub fn weld_started(&self) -> Option<Duration> {
        (self.state == IdleState::Welding).then_some(self.weld_started)
    }

    pub fn retarget<R: Rng + ?Sized>(&mut self, chain: &ArmChain, config: &SimConfig, rng: &mut R) {
        self.idle_target = pick_idle_target(chain, &config.behavior, rng);
    }

    /// Cancel a weld in progress. Does nothing while moving.
    pub fn interrupt<R: Rng + ?Sized>(
        &mut self,
        chain: &ArmChain,
        config: &SimConfig,
        rng: &mut R,
    ) -> Option<IdleTransition> {
        if self.state != IdleState::Welding {
            return None;
        }
        self.state = IdleState::Moving;
        self.retarget(chain, config, rng);
        Some(IdleTransition::Interrupted {
            next: self.idle_target,
        })
    }

    /// Advance one idle frame: ease the target, emit sparks while welding and
    /// take any transition that is due.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        tracker: &mut TargetTracker,
        chain: &ArmChain,
        sparks: &mut SparkPool,
        config: &SimConfig,
        rng: &mut R,
    ) -> Option<IdleTransition> {
        let behavior = &config.behavior;
        match self.state {
            IdleState::Moving => {
                tracker.ease_toward(self.idle_target, behavior.idle_easing);
                if tracker.distance_to(self.idle_target) < behavior.arrival_radius {
                    self.state = IdleState::Welding;
                    self.weld_started = now;
                    self.dwell =
                        Duration::from_secs_f64(sample(rng, behavior.weld_dwell()) / 1000.0);
                    return Some(IdleTransition::WeldStarted { dwell: self.dwell });
                }
                None
            }
            IdleState::Welding => {
                tracker.ease_toward(self.idle_target, behavior.weld_easing);
                if rng.gen::<f64>() < behavior.emit_probability {
                    emit_burst(chain.tip(), sparks, config, rng);
                }

                let elapsed = now.saturating_sub(self.weld_started);
                if elapsed >= self.dwell {
                    self.state = IdleState::Moving;
                    self.retarget(chain, config, rng);
                    return Some(IdleTransition::WeldFinished {
                        elapsed,
                        next: self.idle_target,
                    });
                }
                None
            }
        }
    }
}

/// Throw a burst of sparks from `origin` into a cone around +y.
fn emit_burst<R: Rng + ?Sized>(origin: DVec2, sparks: &mut SparkPool, config: &SimConfig, rng: &mut R) {
    let behavior = &config.behavior;
    for _ in 0..behavior.sparks_per_burst {
        let angle = FRAC_PI_2 + sample(rng, -behavior.spark_cone..behavior.spark_cone);
        let speed = sample(rng, behavior.spark_speed());
        let max_life = sample(rng, config.sparks.max_life());
        sparks.emit(origin, DVec2::from_angle(angle) * speed, max_life);
    }
}
