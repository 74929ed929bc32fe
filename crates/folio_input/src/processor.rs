//! Input processor: raw events in, throttled navigation intents out.

use crate::config::InputConfig;
use crate::gesture::{GesturePolicy, MomentumFilter};
use crate::keyboard::NavIntent;
use crate::raw::RawInput;
use crate::throttle::ScrollThrottle;
use crate::touch::SwipeTracker;

/// Reduces raw input to at most one intent per transition window.
#[derive(Debug)]
pub struct InputProcessor {
    config: InputConfig,
    policy: Box<dyn GesturePolicy>,
    swipe: SwipeTracker,
    throttle: ScrollThrottle,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProcessor {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Build with the default [`MomentumFilter`] using `config.gesture`.
    pub fn with_config(config: InputConfig) -> Self {
        let policy = Box::new(MomentumFilter::with_config(config.gesture.clone()));
        Self::with_policy(config, policy)
    }

    /// Build with a custom wheel policy.
    pub fn with_policy(config: InputConfig, policy: Box<dyn GesturePolicy>) -> Self {
        Self {
            swipe: SwipeTracker::new(config.swipe_threshold),
            throttle: ScrollThrottle::with_config(config.throttle.clone()),
            policy,
            config,
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn policy(&self) -> &dyn GesturePolicy {
        self.policy.as_ref()
    }

    pub fn throttle(&self) -> &ScrollThrottle {
        &self.throttle
    }

    /// Process one event at `now_ms`, treating every intent that passes the
    /// throttle as accepted.
    pub fn process(&mut self, input: RawInput, now_ms: u64) -> Option<NavIntent> {
        let intent = self.interpret(input, now_ms)?;
        self.accept(now_ms);
        Some(intent)
    }

    /// Classify one event and check it against the throttle without
    /// starting a cooldown. Call [`accept`](Self::accept) once the intent
    /// has actually started a transition.
    ///
    /// Gesture history is updated even while throttled, so a momentum tail
    /// that outlives the throttle is still recognized as momentum.
    pub fn interpret(&mut self, input: RawInput, now_ms: u64) -> Option<NavIntent> {
        let intent = self.classify(input)?;

        if self.throttle.is_throttled(now_ms) {
            tracing::trace!(?intent, now_ms, "input dropped by throttle");
            return None;
        }
        Some(intent)
    }

    /// Start the throttle window for a transition begun at `now_ms`.
    pub fn accept(&mut self, now_ms: u64) {
        self.throttle.accept_scroll(now_ms);
    }

    fn classify(&mut self, input: RawInput) -> Option<NavIntent> {
        match input {
            RawInput::Wheel(sample) => self
                .policy
                .classify(sample)
                .direction()
                .map(NavIntent::Step),
            RawInput::TouchStart { y, timestamp_ms } => {
                self.swipe.touch_start(y, timestamp_ms);
                None
            }
            RawInput::TouchEnd { y, timestamp_ms } => {
                self.swipe.touch_end(y, timestamp_ms).map(NavIntent::Step)
            }
            RawInput::KeyDown(key) => self.config.lookup_key(key),
        }
    }

    /// Clear gesture history and throttle state.
    pub fn reset(&mut self) {
        self.policy.reset();
        self.throttle.reset();
    }
}
