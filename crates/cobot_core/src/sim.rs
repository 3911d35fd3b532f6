//! Simulation context
//!
//! Owns every piece of mutable simulation state and advances it one frame at
//! a time. Hosts feed a [`FrameInput`] per display refresh and read the
//! result back through [`Simulation::view`].

use crate::arm::ArmChain;
use crate::behavior::{ActivityMonitor, IdleBehavior, IdleState, IdleTransition, TargetTracker};
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::ik::{FollowSolver, IkSolver};
use crate::math::DVec2;
use crate::sparks::{Spark, SparkPool};
use crate::viewport::Viewport;
use rand::Rng;
use std::time::Duration;

/// Everything the host hands the simulation for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Time since the simulation started
    pub now: Duration,
    /// Latest pointer (or gyro-mapped) position
    pub pointer: DVec2,
    /// Whether a qualifying pointer move happened since the last frame
    pub pointer_moved: bool,
}

/// What the arm is doing, as far as drawing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmMode {
    /// Following the pointer
    Tracking,
    /// Idle, easing toward the next weld point
    Seeking,
    /// Idle, holding a weld point and throwing sparks
    Welding,
}

/// Read-only snapshot handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub chain: &'a ArmChain,
    pub tip: DVec2,
    pub target: DVec2,
    pub mode: ArmMode,
    pub sparks: &'a [Spark],
}

pub struct Simulation<R: Rng> {
    config: SimConfig,
    viewport: Viewport,
    chain: ArmChain,
    solver: Box<dyn IkSolver>,
    tracker: TargetTracker,
    idle: IdleBehavior,
    activity: ActivityMonitor,
    sparks: SparkPool,
    pointer: DVec2,
    idle_mode: bool,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Validate `config` and lay the arm out for `viewport`.
    pub fn new(config: SimConfig, viewport: Viewport, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let desktop = viewport.is_desktop(config.behavior.desktop_min_width);
        let chain = ArmChain::new(
            viewport.anchor(),
            config.arm.lengths(desktop),
            config.arm.rest_spacing,
        )?;
        let center = viewport.center();

        let mut sim = Self {
            config,
            viewport,
            chain,
            solver: Box::new(FollowSolver),
            tracker: TargetTracker::new(center),
            idle: IdleBehavior::new(center),
            activity: ActivityMonitor::new(Duration::ZERO),
            sparks: SparkPool::new(),
            pointer: center,
            idle_mode: false,
            rng,
        };
        sim.idle.retarget(&sim.chain, &sim.config, &mut sim.rng);

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            desktop,
            segments = sim.chain.len(),
            reach = sim.chain.total_reach(),
            "arm initialised"
        );
        Ok(sim)
    }

    /// Swap in a different IK solver.
    pub fn with_solver(mut self, solver: Box<dyn IkSolver>) -> Self {
        self.solver = solver;
        self
    }

    /// Re-anchor and reset the arm for a new viewport.
    ///
    /// Target, pointer, sparks and idle state carry over; only the chain
    /// geometry and the idle target are rebuilt.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), ConfigError> {
        let desktop = viewport.is_desktop(self.config.behavior.desktop_min_width);
        self.chain.reset(
            viewport.anchor(),
            self.config.arm.lengths(desktop),
            self.config.arm.rest_spacing,
        )?;
        self.viewport = viewport;
        self.idle.retarget(&self.chain, &self.config, &mut self.rng);

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            desktop,
            reach = self.chain.total_reach(),
            "arm re-anchored"
        );
        Ok(())
    }

    /// Advance one frame: pointer bookkeeping, sparks, behaviour, IK.
    pub fn step(&mut self, input: FrameInput) {
        self.pointer = input.pointer;
        if input.pointer_moved {
            self.activity.record(input.now);
            if let Some(transition) = self.idle.interrupt(&self.chain, &self.config, &mut self.rng)
            {
                log_transition(&transition);
            }
        }

        self.sparks
            .update(&self.config.sparks, self.chain.anchor().y);

        self.idle_mode = self
            .activity
            .is_idle(input.now, &self.viewport, &self.config.behavior);
        if self.idle_mode {
            let transition = self.idle.step(
                input.now,
                &mut self.tracker,
                &self.chain,
                &mut self.sparks,
                &self.config,
                &mut self.rng,
            );
            if let Some(transition) = transition {
                log_transition(&transition);
            }
        } else {
            self.tracker
                .ease_toward(self.pointer, self.config.behavior.pursuit_easing);
        }

        self.solver.solve(&mut self.chain, self.tracker.target());
    }

    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            chain: &self.chain,
            tip: self.chain.tip(),
            target: self.tracker.target(),
            mode: self.mode(),
            sparks: self.sparks.as_slice(),
        }
    }

    pub fn mode(&self) -> ArmMode {
        match (self.idle_mode, self.idle.state()) {
            (false, _) => ArmMode::Tracking,
            (true, IdleState::Moving) => ArmMode::Seeking,
            (true, IdleState::Welding) => ArmMode::Welding,
        }
    }

    /// Whether the last step ran the idle behaviour.
    pub fn is_idle(&self) -> bool {
        self.idle_mode
    }

    pub fn idle_state(&self) -> IdleState {
        self.idle.state()
    }

    pub fn idle_target(&self) -> DVec2 {
        self.idle.idle_target()
    }

    pub fn target(&self) -> DVec2 {
        self.tracker.target()
    }

    pub fn chain(&self) -> &ArmChain {
        &self.chain
    }

    pub fn sparks(&self) -> &SparkPool {
        &self.sparks
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

fn log_transition(transition: &IdleTransition) {
    match transition {
        IdleTransition::WeldStarted { dwell } => {
            tracing::debug!(dwell_ms = dwell.as_millis() as u64, "weld started");
        }
        IdleTransition::WeldFinished { elapsed, next } => {
            tracing::debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                next_x = next.x,
                next_y = next.y,
                "weld finished"
            );
        }
        IdleTransition::Interrupted { next } => {
            tracing::debug!(next_x = next.x, next_y = next.y, "weld interrupted by pointer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{SimulationTime, REFERENCE_FRAME};
    use rand::{rngs::StdRng, SeedableRng};

    fn wide() -> Simulation<StdRng> {
        Simulation::new(
            SimConfig::default(),
            Viewport::new(1200.0, 900.0),
            StdRng::seed_from_u64(1234),
        )
        .unwrap()
    }

    fn still(now: Duration, pointer: DVec2) -> FrameInput {
        FrameInput {
            now,
            pointer,
            pointer_moved: false,
        }
    }

    #[test]
    fn initial_layout_follows_viewport() {
        let sim = wide();
        assert_eq!(sim.chain().anchor(), DVec2::new(600.0, 900.0));
        assert_eq!(sim.chain().total_reach(), 400.0);
        assert_eq!(sim.target(), DVec2::new(600.0, 450.0));
        assert_eq!(sim.idle_state(), IdleState::Moving);
        let r = sim.idle_target().distance(sim.chain().anchor());
        assert!(r >= 120.0 - 1e-9 && r < 340.0 + 1e-9);

        let compact = Simulation::new(
            SimConfig::default(),
            Viewport::new(600.0, 900.0),
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(compact.chain().total_reach(), 220.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SimConfig::default();
        config.arm.desktop_lengths = vec![100.0, f64::NAN];
        let result = Simulation::new(config, Viewport::new(1200.0, 900.0), StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(ConfigError::InvalidLength { index: 1, .. })));
    }

    #[test]
    fn active_pointer_is_pursued_fast() {
        let mut sim = wide();
        let pointer = DVec2::new(700.0, 500.0);
        sim.step(FrameInput {
            now: REFERENCE_FRAME,
            pointer,
            pointer_moved: true,
        });
        let expected = DVec2::new(600.0, 450.0) + (pointer - DVec2::new(600.0, 450.0)) * 0.08;
        assert!(sim.target().distance(expected) < 1e-9);
        assert_eq!(sim.mode(), ArmMode::Tracking);
    }

    #[test]
    fn stationary_pointer_goes_idle_and_keeps_moving_until_arrival() {
        let mut sim = wide();
        let pointer = sim.viewport().center();
        let mut time = SimulationTime::new();

        // 2600ms without a qualifying move.
        while time.now() < Duration::from_millis(2600) {
            let now = time.advance(REFERENCE_FRAME);
            sim.step(still(now, pointer));
        }
        assert!(sim.is_idle());
        assert_eq!(sim.idle_state(), IdleState::Moving);
        assert!(sim.target().distance(sim.idle_target()) >= 5.0);

        // Keep stepping: the weld only starts once the target gets close.
        let mut welded_at = None;
        for _ in 0..3000 {
            let before = sim.target().distance(sim.idle_target());
            let now = time.advance(REFERENCE_FRAME);
            sim.step(still(now, pointer));
            if sim.idle_state() == IdleState::Welding {
                assert!(before >= 5.0);
                assert!(sim.target().distance(sim.idle_target()) < 5.0);
                welded_at = Some(now);
                break;
            }
        }
        assert!(welded_at.is_some(), "arm never reached its idle target");
        assert_eq!(sim.mode(), ArmMode::Welding);
    }

    #[test]
    fn welding_sparks_fall_to_the_ground_line() {
        let mut sim = wide();
        let pointer = sim.viewport().center();
        let mut time = SimulationTime::new();
        let ground = sim.chain().anchor().y;

        let mut saw_sparks = false;
        for _ in 0..4000 {
            let now = time.advance(REFERENCE_FRAME);
            sim.step(still(now, pointer));
            saw_sparks |= !sim.sparks().is_empty();
            for spark in sim.sparks().iter() {
                // Sparks emitted this frame have not been integrated yet.
                assert!(spark.position.y <= ground || spark.life == 1.0);
                assert!(spark.life > 0.0);
            }
        }
        assert!(saw_sparks);
        // Fixed lifetime and ~1.2 sparks per frame keep the pool bounded.
        assert!(sim.sparks().len() < 200);
    }

    #[test]
    fn pointer_move_interrupts_weld_and_leaves_idle() {
        let mut sim = wide();
        let pointer = sim.viewport().center();
        let mut time = SimulationTime::new();

        for _ in 0..4000 {
            let now = time.advance(REFERENCE_FRAME);
            sim.step(still(now, pointer));
            if sim.idle_state() == IdleState::Welding {
                break;
            }
        }
        assert_eq!(sim.idle_state(), IdleState::Welding);
        let old_target = sim.idle_target();

        let now = time.advance(REFERENCE_FRAME);
        sim.step(FrameInput {
            now,
            pointer: pointer + DVec2::new(40.0, 0.0),
            pointer_moved: true,
        });
        assert_eq!(sim.idle_state(), IdleState::Moving);
        assert_ne!(sim.idle_target(), old_target);
        assert!(!sim.is_idle());
        assert_eq!(sim.mode(), ArmMode::Tracking);
    }

    #[test]
    fn compact_viewport_always_tracks() {
        let mut sim = Simulation::new(
            SimConfig::default(),
            Viewport::new(700.0, 900.0),
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        let pointer = DVec2::new(100.0, 100.0);
        let mut time = SimulationTime::new();
        for _ in 0..600 {
            let now = time.advance(REFERENCE_FRAME);
            sim.step(still(now, pointer));
            assert_eq!(sim.mode(), ArmMode::Tracking);
        }
        assert!(sim.target().distance(pointer) < 1e-6);
        assert!(sim.sparks().is_empty());
    }

    #[test]
    fn resize_reanchors_and_retargets() {
        let mut sim = wide();
        let before = sim.idle_target();
        sim.resize(Viewport::new(1600.0, 1000.0)).unwrap();

        assert_eq!(sim.chain().anchor(), DVec2::new(800.0, 1000.0));
        assert_eq!(sim.chain().segments()[1].base, DVec2::new(800.0, 950.0));
        assert_ne!(sim.idle_target(), before);
        let r = sim.idle_target().distance(sim.chain().anchor());
        assert!(r >= 120.0 - 1e-9 && r < 340.0 + 1e-9);

        sim.resize(Viewport::new(500.0, 700.0)).unwrap();
        assert_eq!(sim.chain().total_reach(), 220.0);
    }

    #[test]
    fn chain_stays_anchored_every_frame() {
        let mut sim = wide();
        let mut time = SimulationTime::new();
        for i in 0..300 {
            let now = time.advance(REFERENCE_FRAME);
            let pointer = DVec2::new(100.0 + i as f64 * 3.0, 200.0 + (i % 40) as f64 * 10.0);
            sim.step(FrameInput {
                now,
                pointer,
                pointer_moved: true,
            });
            assert_eq!(sim.chain().segments()[0].base, sim.chain().anchor());
            assert!(sim.chain().connectivity_error() < 1e-6);
            assert_eq!(sim.view().tip, sim.chain().tip());
        }
    }

    #[test]
    fn custom_solver_is_used() {
        struct Frozen;
        impl IkSolver for Frozen {
            fn solve(&mut self, _chain: &mut ArmChain, _target: DVec2) {}
        }

        let mut sim = wide().with_solver(Box::new(Frozen));
        let rest = sim.chain().clone();
        sim.step(still(REFERENCE_FRAME, DVec2::new(10.0, 10.0)));
        assert_eq!(sim.chain(), &rest);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = wide();
            let mut time = SimulationTime::new();
            for _ in 0..1500 {
                let now = time.advance(REFERENCE_FRAME);
                sim.step(still(now, DVec2::new(600.0, 450.0)));
            }
            (sim.target(), sim.idle_target(), sim.sparks().len())
        };
        assert_eq!(run(), run());
    }
}
