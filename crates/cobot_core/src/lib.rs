//! Cobot Core
//!
//! Contains the simulation behind the animated robotic arm:
//! - Arm chain geometry and the follow-style IK solver
//! - Idle behaviour (weld point selection, MOVING/WELDING state machine)
//! - Target tracking against pointer input
//! - Weld spark particles
//! - The simulation context tying them into one frame step

pub mod arm;
pub mod behavior;
pub mod config;
pub mod error;
pub mod ik;
pub mod math;
pub mod sim;
pub mod sparks;
pub mod time;
pub mod viewport;

pub use glam;

pub use arm::{ArmChain, Segment};
pub use config::{ArmConfig, BehaviorConfig, SimConfig, SparkConfig};
pub use error::ConfigError;
pub use ik::{FollowSolver, IkSolver};
pub use sim::{ArmMode, FrameInput, SceneView, Simulation};
pub use sparks::{Spark, SparkBand, SparkPool};
pub use viewport::Viewport;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
