//! Autonomous behaviour
//!
//! Decides where the arm should be heading each frame: the live pointer
//! while the user is active, or a self-chosen weld point once they go quiet.

mod activity;
mod idle;
mod idle_target;
mod tracker;

pub use activity::ActivityMonitor;
pub use idle::{IdleBehavior, IdleState, IdleTransition};
pub use idle_target::pick_idle_target;
pub use tracker::TargetTracker;
