use crate::math::DVec2;

/// Exponentially smoothed point the IK solver chases
///
/// The target never jumps: every update moves it a fixed fraction of the
/// way toward its goal. No clamping to the canvas or to the arm's reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTracker {
    target: DVec2,
}

impl TargetTracker {
    pub fn new(start: DVec2) -> Self {
        Self { target: start }
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }

    pub fn ease_toward(&mut self, goal: DVec2, easing: f64) {
        self.target += (goal - self.target) * easing;
    }

    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.target.distance(point)
    }
}
