//! Raw input events from any source.

use crate::keyboard::KeyCode;
use serde::{Deserialize, Serialize};

/// Scroll direction along the section sequence.
///
/// `Down` moves toward higher section indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of a wheel or swipe delta. Zero has no direction.
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Direction::Down)
        } else if delta < 0.0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Signed step: `+1` for `Down`, `-1` for `Up`.
    pub fn step(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// A single wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSample {
    /// Event time in milliseconds (any monotonic origin).
    pub timestamp_ms: u64,
    /// Vertical delta in pixels. Positive scrolls down.
    pub delta_y: f32,
}

impl WheelSample {
    pub fn new(timestamp_ms: u64, delta_y: f32) -> Self {
        Self {
            timestamp_ms,
            delta_y,
        }
    }

    pub fn magnitude(&self) -> f32 {
        self.delta_y.abs()
    }
}

/// Raw input event from any source.
///
/// Platform events are converted to this type before processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawInput {
    /// Mouse wheel or trackpad scroll.
    Wheel(WheelSample),

    /// Finger down at vertical position `y`.
    TouchStart { y: f32, timestamp_ms: u64 },

    /// Finger up at vertical position `y`.
    TouchEnd { y: f32, timestamp_ms: u64 },

    /// Navigation key pressed.
    KeyDown(KeyCode),
}

impl RawInput {
    pub fn wheel(timestamp_ms: u64, delta_y: f32) -> Self {
        RawInput::Wheel(WheelSample::new(timestamp_ms, delta_y))
    }

    pub fn is_wheel(&self) -> bool {
        matches!(self, RawInput::Wheel(_))
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, RawInput::TouchStart { .. } | RawInput::TouchEnd { .. })
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self, RawInput::KeyDown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_delta() {
        assert_eq!(Direction::from_delta(12.0), Some(Direction::Down));
        assert_eq!(Direction::from_delta(-0.5), Some(Direction::Up));
        assert_eq!(Direction::from_delta(0.0), None);
        assert_eq!(Direction::Down.step(), 1);
        assert_eq!(Direction::Up.step(), -1);
    }

    #[test]
    fn raw_input_categories() {
        assert!(RawInput::wheel(0, 10.0).is_wheel());
        assert!(!RawInput::wheel(0, 10.0).is_touch());
        assert!(RawInput::TouchStart {
            y: 0.0,
            timestamp_ms: 0
        }
        .is_touch());
        assert!(RawInput::KeyDown(KeyCode::Home).is_keyboard());
    }
}
