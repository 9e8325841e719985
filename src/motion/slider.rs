//! Vertical slider axis.

use super::vector::{approximately, move_towards_f32};
use serde::{Deserialize, Serialize};

/// A single vertical axis travelling between `bottom` and `top` at a fixed speed.
///
/// The axis has no completion event of its own. Callers compare the position
/// against the commanded end with [`SliderAxis::is_at`], which is a
/// tolerance check rather than exact equality.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderAxis {
    position: f32,
    bottom: f32,
    top: f32,
    speed: f32,
    target: Option<f32>,
}

impl SliderAxis {
    /// Create an axis resting at `bottom`.
    pub fn new(bottom: f32, top: f32, speed: f32) -> Self {
        Self {
            position: bottom,
            bottom,
            top,
            speed,
            target: None,
        }
    }

    /// Place the axis at `position`, clamped into its travel range.
    pub fn with_position(mut self, position: f32) -> Self {
        self.position = position.clamp(self.bottom, self.top);
        self
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    /// The end of travel most recently commanded, if any.
    pub fn target(&self) -> Option<f32> {
        self.target
    }

    /// Remember `target_y` as the commanded end of travel.
    pub fn command(&mut self, target_y: f32) {
        self.target = Some(target_y.clamp(self.bottom, self.top));
    }

    /// Advance toward `target_y` by at most `speed * dt`, never overshooting.
    ///
    /// Returns the new position.
    pub fn move_toward(&mut self, target_y: f32, dt: f32) -> f32 {
        let target_y = target_y.clamp(self.bottom, self.top);
        self.target = Some(target_y);
        self.position = move_towards_f32(self.position, target_y, self.speed * dt.max(0.0));
        self.position
    }

    /// Whether the axis is within `tolerance` of `y`.
    pub fn is_at(&self, y: f32, tolerance: f32) -> bool {
        approximately(self.position, y, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_bottom() {
        let slider = SliderAxis::new(0.0, 3.1, 5.0);
        assert_eq!(slider.position(), 0.0);
        assert_eq!(slider.target(), None);
    }

    #[test]
    fn moves_by_speed_times_dt() {
        let mut slider = SliderAxis::new(0.0, 3.1, 5.0);
        let y = slider.move_toward(3.1, 0.1);
        assert!((y - 0.5).abs() < 1e-6);
        assert_eq!(slider.target(), Some(3.1));
    }

    #[test]
    fn never_overshoots_the_target() {
        let mut slider = SliderAxis::new(0.0, 3.1, 5.0).with_position(3.0);
        slider.move_toward(3.1, 0.1);
        assert_eq!(slider.position(), 3.1);
    }

    #[test]
    fn target_is_clamped_to_travel() {
        let mut slider = SliderAxis::new(0.0, 3.1, 100.0);
        slider.move_toward(10.0, 1.0);
        assert_eq!(slider.position(), 3.1);
        slider.move_toward(-10.0, 1.0);
        assert_eq!(slider.position(), 0.0);
    }

    #[test]
    fn negative_dt_does_not_move() {
        let mut slider = SliderAxis::new(0.0, 3.1, 5.0).with_position(1.0);
        slider.move_toward(3.1, -0.5);
        assert_eq!(slider.position(), 1.0);
    }

    #[test]
    fn converges_within_bounded_ticks() {
        for speed in [0.5_f32, 1.0, 5.0, 12.0] {
            let mut slider = SliderAxis::new(0.0, 3.1, speed);
            let dt = 1.0 / 30.0;
            let bound = (3.1 / (speed * dt)).ceil() as usize + 1;
            let ticks = (1..=bound)
                .find(|_| {
                    slider.move_toward(3.1, dt);
                    slider.is_at(3.1, 1e-4)
                })
                .expect("slider should converge");
            assert!(ticks <= bound, "speed {speed} took {ticks} ticks");
        }
    }
}
