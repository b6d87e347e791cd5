//! Double-tap detection.
//!
//! A gesture completes when the stick is fully deflected in one direction,
//! let go, and fully deflected in the same direction again before the
//! window clock runs out. The clock restarts on every full deflection, so
//! the window is measured from the last frame the stick was pinned.

use super::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoubleTap {
    axis: Axis,
    /// Accept positive deflections as well as negative ones.
    bidirectional: bool,
    window_ms: f32,
    /// Direction of the tap waiting to be released, 0 when idle.
    first: i8,
    /// Direction released after a first tap, 0 when idle.
    armed: i8,
    timer_ms: f32,
}

impl DoubleTap {
    pub fn new(axis: Axis, bidirectional: bool, window_ms: f32) -> Self {
        DoubleTap {
            axis,
            bidirectional,
            window_ms,
            first: 0,
            armed: 0,
            timer_ms: 0.0,
        }
    }

    /// Direction of a full deflection along this detector's axis, if any.
    pub fn deflection(&self, stick: Vec2) -> Option<i8> {
        let value = match self.axis {
            Axis::Horizontal => stick.x,
            Axis::Vertical => stick.y,
        };
        if value == -1.0 {
            Some(-1)
        } else if value == 1.0 && self.bidirectional {
            Some(1)
        } else {
            None
        }
    }

    /// Registers a full deflection toward `dir`. Returns true when this tap
    /// completes the gesture.
    pub fn press(&mut self, dir: i8) -> bool {
        let fired = self.armed == dir && self.timer_ms < self.window_ms;
        if fired {
            self.clear();
        } else {
            self.first = dir;
        }
        self.timer_ms = 0.0;
        fired
    }

    /// The stick left full deflection.
    pub fn release(&mut self) {
        if self.first != 0 {
            self.armed = self.first;
        }
    }

    pub fn tick(&mut self, elapsed_ms: f32) {
        self.timer_ms += elapsed_ms;
    }

    /// Forgets any tap in progress, keeping the clock.
    pub fn clear(&mut self) {
        self.first = 0;
        self.armed = 0;
    }

    pub fn reset(&mut self) {
        self.clear();
        self.timer_ms = 0.0;
    }

    #[cfg(test)]
    fn timer_ms(&self) -> f32 {
        self.timer_ms
    }

    #[cfg(test)]
    fn is_armed(&self) -> bool {
        self.armed != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dash_detector() -> DoubleTap {
        DoubleTap::new(Axis::Horizontal, true, 50.0)
    }

    #[test]
    fn test_deflection_axis_and_direction() {
        let horizontal = dash_detector();
        assert_eq!(horizontal.deflection(Vec2::new(1.0, 0.0)), Some(1));
        assert_eq!(horizontal.deflection(Vec2::new(-1.0, 1.0)), Some(-1));
        assert_eq!(horizontal.deflection(Vec2::new(0.99, 0.0)), None);

        let down_only = DoubleTap::new(Axis::Vertical, false, 50.0);
        assert_eq!(down_only.deflection(Vec2::new(0.0, -1.0)), Some(-1));
        assert_eq!(
            down_only.deflection(Vec2::new(0.0, 1.0)),
            None,
            "Upward deflection should be ignored"
        );
    }

    #[test]
    fn test_tap_release_tap_fires() {
        let mut tap = dash_detector();
        assert!(!tap.press(1));
        tap.tick(16.0);
        tap.release();
        assert!(tap.is_armed());
        tap.tick(16.0);
        assert!(tap.press(1), "Second tap inside the window should fire");
        assert!(!tap.is_armed(), "Firing should clear tap tracking");
    }

    #[test]
    fn test_window_is_exclusive() {
        let mut tap = dash_detector();
        tap.press(-1);
        tap.release();
        tap.tick(50.0);
        assert!(!tap.press(-1), "A 50ms gap must not fire");

        let mut tap = dash_detector();
        tap.press(-1);
        tap.release();
        tap.tick(49.9);
        assert!(tap.press(-1));
    }

    #[test]
    fn test_opposite_direction_does_not_fire() {
        let mut tap = dash_detector();
        tap.press(1);
        tap.release();
        assert!(!tap.press(-1));
        tap.release();
        assert!(tap.press(-1), "Re-tapping the new direction should fire");
    }

    #[test]
    fn test_held_deflection_does_not_fire() {
        let mut tap = dash_detector();
        for _ in 0..5 {
            assert!(!tap.press(1), "Holding without release never fires");
            tap.tick(16.0);
        }
    }

    #[test]
    fn test_reset_clears_clock() {
        let mut tap = dash_detector();
        tap.press(1);
        tap.tick(30.0);
        tap.reset();
        assert_eq!(tap.timer_ms(), 0.0);
        assert!(!tap.is_armed());
    }
}
