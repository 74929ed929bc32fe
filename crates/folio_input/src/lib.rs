//! Input handling for section-at-a-time scrolling.
//!
//! Raw browser input (wheel, touch, keyboard) is reduced to discrete
//! navigation intents. Trackpads and free-spinning wheels emit long tails of
//! momentum events after the physical gesture ends; those must not become
//! extra section transitions.
//!
//! # Architecture
//!
//! ```text
//! Wheel    ─► GesturePolicy (momentum filter) ─┐
//! Touch    ─► SwipeTracker ────────────────────┼──► ScrollThrottle ──► NavIntent
//! Keyboard ─► InputConfig bindings ────────────┘
//! ```
//!
//! The thresholds used by [`MomentumFilter`] are empirical tuning, not a
//! formal guarantee. Swap the policy through [`InputProcessor::with_policy`]
//! when a device needs different behavior.
//!
//! # Example
//!
//! ```
//! use folio_input::{InputProcessor, NavIntent, Direction, RawInput, WheelSample};
//!
//! let mut processor = InputProcessor::new();
//! let intent = processor.process(RawInput::Wheel(WheelSample::new(0, 40.0)), 0);
//! assert_eq!(intent, Some(NavIntent::Step(Direction::Down)));
//!
//! // Momentum tail of the same flick is swallowed.
//! let intent = processor.process(RawInput::Wheel(WheelSample::new(16, 30.0)), 16);
//! assert_eq!(intent, None);
//! ```

mod config;
mod error;
mod gesture;
mod keyboard;
mod processor;
mod raw;
mod throttle;
mod touch;

pub use config::InputConfig;
pub use error::InputError;
pub use gesture::{GestureConfig, GesturePolicy, GestureSession, MomentumFilter, WheelVerdict};
pub use keyboard::{KeyCode, NavIntent};
pub use processor::InputProcessor;
pub use raw::{Direction, RawInput, WheelSample};
pub use throttle::{ScrollThrottle, ThrottleConfig};
pub use touch::SwipeTracker;

/// Gap after which a wheel event is treated as a new gesture (milliseconds).
pub const DEFAULT_GESTURE_TIMEOUT_MS: u64 = 100;

/// Delta growth factor that marks a fresh flick inside a momentum tail.
pub const DEFAULT_DELTA_SPIKE_RATIO: f32 = 3.0;

/// Minimum absolute delta for a spike to count as a new gesture.
pub const DEFAULT_MIN_DELTA_FOR_NEW_GESTURE: f32 = 5.0;

/// Cooldown after an accepted scroll (milliseconds).
pub const DEFAULT_SCROLL_COOLDOWN_MS: u64 = 800;

/// Duration of the section transition animation (milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 500;

/// Vertical travel needed for a touch swipe (pixels).
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn constants_are_reasonable() {
        assert!(DEFAULT_GESTURE_TIMEOUT_MS > 0);
        assert!(DEFAULT_DELTA_SPIKE_RATIO > 1.0);
        assert!(DEFAULT_MIN_DELTA_FOR_NEW_GESTURE > 0.0);
        assert!(DEFAULT_SCROLL_COOLDOWN_MS >= DEFAULT_ANIMATION_DURATION_MS);
        assert!(DEFAULT_SWIPE_THRESHOLD > 0.0);
    }
}
