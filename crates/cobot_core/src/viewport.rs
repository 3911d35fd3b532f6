//! Viewport geometry and layout classification

use crate::math::DVec2;

/// Logical size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Arm anchor: bottom centre of the surface, which doubles as the ground line.
    pub fn anchor(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height)
    }

    /// Wide layouts get the full-size arm and idle behaviour.
    pub fn is_desktop(&self, min_width: f64) -> bool {
        self.width > min_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_bottom_centre() {
        let viewport = Viewport::new(1000.0, 800.0);
        assert_eq!(viewport.anchor(), DVec2::new(500.0, 800.0));
        assert_eq!(viewport.center(), DVec2::new(500.0, 400.0));
    }

    #[test]
    fn desktop_threshold_is_exclusive() {
        assert!(!Viewport::new(768.0, 600.0).is_desktop(768.0));
        assert!(Viewport::new(769.0, 600.0).is_desktop(768.0));
    }
}
