//! Pointer and gyroscope input
//!
//! Host callbacks write into a [`PointerRegister`] whenever they fire; the
//! frame loop reads it exactly once per frame, so simulation state only ever
//! changes at frame boundaries.

use cobot_core::math::DVec2;
use cobot_core::Viewport;

/// Latest pointer state as seen by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: DVec2,
    /// At least one event since the previous sample moved further than the threshold
    pub moved: bool,
}

/// Latest-value register for pointer events
#[derive(Debug, Clone)]
pub struct PointerRegister {
    position: DVec2,
    threshold: f64,
    moved: bool,
}

impl PointerRegister {
    pub fn new(start: DVec2, threshold: f64) -> Self {
        Self {
            position: start,
            threshold,
            moved: false,
        }
    }

    /// Record one pointer event.
    ///
    /// The distance is measured against the previous event, so a slow drift of
    /// sub-threshold steps never counts as activity.
    pub fn record(&mut self, position: DVec2) {
        if position.distance(self.position) > self.threshold {
            self.moved = true;
        }
        self.position = position;
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Read the register for this frame and clear the activity flag.
    pub fn take(&mut self) -> PointerSample {
        let sample = PointerSample {
            position: self.position,
            moved: self.moved,
        };
        self.moved = false;
        sample
    }
}

/// Device-orientation input mapped into pointer space
///
/// Permission handling belongs to the host; it only flips the switch here.
#[derive(Debug, Clone, Copy, Default)]
pub struct GyroInput {
    enabled: bool,
}

impl GyroInput {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Map left/right tilt (`gamma`) and front/back tilt (`beta`), both in
    /// degrees within ±90, onto the viewport.
    pub fn map(gamma: f64, beta: f64, viewport: &Viewport) -> DVec2 {
        DVec2::new(
            viewport.width * (gamma + 90.0) / 180.0,
            viewport.height * (beta + 90.0) / 180.0,
        )
    }

    /// Feed an orientation reading into the pointer register. Ignored while disabled.
    pub fn on_orientation(
        &self,
        gamma: f64,
        beta: f64,
        viewport: &Viewport,
        pointer: &mut PointerRegister,
    ) -> Option<DVec2> {
        if !self.enabled {
            return None;
        }
        let position = Self::map(gamma, beta, viewport);
        pointer.record(position);
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_move_is_activity_until_taken() {
        let mut pointer = PointerRegister::new(DVec2::new(100.0, 100.0), 5.0);
        pointer.record(DVec2::new(110.0, 100.0));

        let sample = pointer.take();
        assert!(sample.moved);
        assert_eq!(sample.position, DVec2::new(110.0, 100.0));

        let again = pointer.take();
        assert!(!again.moved);
        assert_eq!(again.position, DVec2::new(110.0, 100.0));
    }

    #[test]
    fn slow_drift_is_not_activity() {
        let mut pointer = PointerRegister::new(DVec2::ZERO, 5.0);
        for i in 1..=20 {
            pointer.record(DVec2::new(i as f64 * 4.0, 0.0));
        }
        let sample = pointer.take();
        assert!(!sample.moved);
        assert_eq!(sample.position, DVec2::new(80.0, 0.0));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut pointer = PointerRegister::new(DVec2::ZERO, 5.0);
        pointer.record(DVec2::new(3.0, 4.0));
        assert!(!pointer.take().moved);
        pointer.record(DVec2::new(3.0, 10.0));
        assert!(pointer.take().moved);
    }

    #[test]
    fn gyro_maps_level_device_to_centre() {
        let viewport = Viewport::new(400.0, 800.0);
        assert_eq!(GyroInput::map(0.0, 0.0, &viewport), DVec2::new(200.0, 400.0));
        assert_eq!(GyroInput::map(-90.0, 90.0, &viewport), DVec2::new(0.0, 800.0));
        assert_eq!(GyroInput::map(45.0, -45.0, &viewport), DVec2::new(300.0, 200.0));
    }

    #[test]
    fn disabled_gyro_is_ignored() {
        let viewport = Viewport::new(400.0, 800.0);
        let mut pointer = PointerRegister::new(DVec2::ZERO, 5.0);
        let mut gyro = GyroInput::default();

        assert_eq!(gyro.on_orientation(0.0, 0.0, &viewport, &mut pointer), None);
        assert_eq!(pointer.position(), DVec2::ZERO);

        assert!(gyro.toggle());
        let mapped = gyro.on_orientation(0.0, 0.0, &viewport, &mut pointer);
        assert_eq!(mapped, Some(DVec2::new(200.0, 400.0)));
        let sample = pointer.take();
        assert!(sample.moved);
        assert_eq!(sample.position, DVec2::new(200.0, 400.0));

        gyro.disable();
        assert!(!gyro.is_enabled());
    }
}
