//! Single-flight gate for section transitions.

use crate::{DEFAULT_ANIMATION_DURATION_MS, DEFAULT_SCROLL_COOLDOWN_MS};
use serde::{Deserialize, Serialize};

/// Throttle timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Minimum time between two accepted scrolls (ms).
    pub scroll_cooldown_ms: u64,
    /// How long an accepted scroll is considered animating (ms).
    pub animation_duration_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            scroll_cooldown_ms: DEFAULT_SCROLL_COOLDOWN_MS,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

/// Rejects transition requests while one is animating or cooling down.
///
/// Rejected requests are dropped, never queued. Time is passed in by the
/// caller, so the animation "timer" is a deadline checked on every query.
#[derive(Debug, Clone, Default)]
pub struct ScrollThrottle {
    config: ThrottleConfig,
    last_accepted_ms: Option<u64>,
    animating_until_ms: Option<u64>,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::with_config(ThrottleConfig::default())
    }

    pub fn with_config(config: ThrottleConfig) -> Self {
        Self {
            config,
            last_accepted_ms: None,
            animating_until_ms: None,
        }
    }

    pub fn config(&self) -> &ThrottleConfig {
        &self.config
    }

    /// True while an animation is in progress or within the cooldown window.
    pub fn is_throttled(&self, now_ms: u64) -> bool {
        self.is_animating(now_ms) || self.in_cooldown(now_ms)
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.animating_until_ms
            .is_some_and(|deadline| now_ms < deadline)
    }

    fn in_cooldown(&self, now_ms: u64) -> bool {
        self.last_accepted_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.config.scroll_cooldown_ms)
    }

    /// Mark a scroll as accepted at `now_ms`. Callers check
    /// [`is_throttled`](Self::is_throttled) first.
    pub fn accept_scroll(&mut self, now_ms: u64) {
        self.last_accepted_ms = Some(now_ms);
        self.animating_until_ms = Some(now_ms.saturating_add(self.config.animation_duration_ms));
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
        self.animating_until_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_throttle_is_open() {
        let throttle = ScrollThrottle::new();
        assert!(!throttle.is_throttled(0));
        assert!(!throttle.is_throttled(u64::MAX));
    }

    #[test]
    fn animation_window_blocks() {
        let mut throttle = ScrollThrottle::with_config(ThrottleConfig {
            scroll_cooldown_ms: 0,
            animation_duration_ms: 500,
        });
        throttle.accept_scroll(1_000);

        assert!(throttle.is_animating(1_000));
        assert!(throttle.is_throttled(1_499));
        assert!(!throttle.is_throttled(1_500));
    }

    #[test]
    fn cooldown_outlasts_animation() {
        let mut throttle = ScrollThrottle::new();
        throttle.accept_scroll(0);

        assert!(!throttle.is_animating(600));
        assert!(throttle.is_throttled(600));
        assert!(!throttle.is_throttled(DEFAULT_SCROLL_COOLDOWN_MS));
    }

    #[test]
    fn reset_reopens() {
        let mut throttle = ScrollThrottle::new();
        throttle.accept_scroll(0);
        throttle.reset();
        assert!(!throttle.is_throttled(1));
    }
}
