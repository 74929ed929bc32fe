//! Vertical swipe detection for touch screens.

use crate::raw::Direction;
use crate::DEFAULT_SWIPE_THRESHOLD;

/// Tracks one touch from start to end and reports a swipe direction.
///
/// Dragging the finger up reveals the next section, so it maps to
/// [`Direction::Down`].
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_y: Option<f32>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    pub fn touch_start(&mut self, y: f32, _timestamp_ms: u64) {
        self.start_y = Some(y);
    }

    /// Finish the touch. A travel of more than the threshold is a swipe.
    pub fn touch_end(&mut self, y: f32, _timestamp_ms: u64) -> Option<Direction> {
        let start_y = self.start_y.take()?;
        let travel = start_y - y;
        if travel.abs() > self.threshold {
            Direction::from_delta(travel)
        } else {
            None
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_up_moves_down() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(600.0, 0);
        assert_eq!(tracker.touch_end(400.0, 120), Some(Direction::Down));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn swipe_down_moves_up() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(100.0, 0);
        assert_eq!(tracker.touch_end(300.0, 120), Some(Direction::Up));
    }

    #[test]
    fn short_travel_is_a_tap() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(100.0, 0);
        assert_eq!(tracker.touch_end(130.0, 80), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.touch_end(0.0, 0), None);
    }
}
