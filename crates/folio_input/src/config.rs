//! Input configuration and key bindings.

use crate::error::InputError;
use crate::gesture::GestureConfig;
use crate::keyboard::{KeyCode, NavIntent};
use crate::raw::Direction;
use crate::throttle::ThrottleConfig;
use crate::DEFAULT_SWIPE_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete input configuration.
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```
/// let config: folio_input::InputConfig =
///     serde_json::from_str(r#"{ "gesture": { "gesture_timeout_ms": 150 } }"#).unwrap();
/// assert_eq!(config.gesture.gesture_timeout_ms, 150);
/// assert_eq!(config.gesture.delta_spike_ratio, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Wheel momentum filter thresholds.
    pub gesture: GestureConfig,

    /// Transition throttle timings.
    pub throttle: ThrottleConfig,

    /// Touch swipe distance (pixels).
    pub swipe_threshold: f32,

    /// Key → intent bindings.
    pub bindings: HashMap<KeyCode, NavIntent>,
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut config = Self::empty();
        config.setup_default_bindings();
        config
    }
}

impl InputConfig {
    /// Default tunables with no key bindings.
    pub fn empty() -> Self {
        Self {
            gesture: GestureConfig::default(),
            throttle: ThrottleConfig::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            bindings: HashMap::new(),
        }
    }

    fn setup_default_bindings(&mut self) {
        let down = NavIntent::Step(Direction::Down);
        let up = NavIntent::Step(Direction::Up);

        self.bindings.insert(KeyCode::ArrowDown, down);
        self.bindings.insert(KeyCode::PageDown, down);
        self.bindings.insert(KeyCode::ArrowUp, up);
        self.bindings.insert(KeyCode::PageUp, up);
        self.bindings.insert(KeyCode::Home, NavIntent::First);
        self.bindings.insert(KeyCode::End, NavIntent::Last);
    }

    /// Look up the intent bound to a key.
    pub fn lookup_key(&self, key: KeyCode) -> Option<NavIntent> {
        self.bindings.get(&key).copied()
    }

    pub fn bind_key(&mut self, key: KeyCode, intent: NavIntent) {
        self.bindings.insert(key, intent);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Reject values that would make the filters meaningless.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.gesture.gesture_timeout_ms == 0 {
            return Err(InputError::invalid("gesture_timeout_ms", "must be positive"));
        }
        if !(self.gesture.delta_spike_ratio.is_finite() && self.gesture.delta_spike_ratio > 0.0) {
            return Err(InputError::invalid("delta_spike_ratio", "must be a positive number"));
        }
        if !(self.gesture.min_delta_for_new_gesture.is_finite()
            && self.gesture.min_delta_for_new_gesture >= 0.0)
        {
            return Err(InputError::invalid(
                "min_delta_for_new_gesture",
                "must be a non-negative number",
            ));
        }
        if self.throttle.animation_duration_ms == 0 {
            return Err(InputError::invalid("animation_duration_ms", "must be positive"));
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(InputError::invalid("swipe_threshold", "must be a positive number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_bindings() {
        let config = InputConfig::default();
        assert_eq!(config.bindings.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn key_lookup() {
        let config = InputConfig::default();

        assert_eq!(
            config.lookup_key(KeyCode::PageDown),
            Some(NavIntent::Step(Direction::Down))
        );
        assert_eq!(config.lookup_key(KeyCode::Home), Some(NavIntent::First));

        let empty = InputConfig::empty();
        assert_eq!(empty.lookup_key(KeyCode::Home), None);
    }

    #[test]
    fn custom_binding() {
        let mut config = InputConfig::empty();
        config.bind_key(KeyCode::PageUp, NavIntent::First);
        assert_eq!(config.lookup_key(KeyCode::PageUp), Some(NavIntent::First));

        config.unbind_key(KeyCode::PageUp);
        assert_eq!(config.lookup_key(KeyCode::PageUp), None);
    }

    #[test]
    fn invalid_ratio_rejected() {
        let mut config = InputConfig::default();
        config.gesture.delta_spike_ratio = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(InputError::InvalidConfig {
                field: "delta_spike_ratio",
                ..
            })
        ));
    }

    #[test]
    fn bindings_round_trip_through_json() {
        let json = r#"{ "bindings": { "End": "First" } }"#;
        let config: InputConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.lookup_key(KeyCode::End), Some(NavIntent::First));
        assert_eq!(config.lookup_key(KeyCode::Home), None);
    }
}
