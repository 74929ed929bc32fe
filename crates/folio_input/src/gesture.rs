//! Wheel gesture classification.
//!
//! One physical flick on a trackpad produces dozens of wheel events: the
//! user's input followed by a decelerating momentum tail. Only the first event
//! of each physical gesture should move the presentation.

use crate::raw::{Direction, WheelSample};
use crate::{
    DEFAULT_DELTA_SPIKE_RATIO, DEFAULT_GESTURE_TIMEOUT_MS, DEFAULT_MIN_DELTA_FOR_NEW_GESTURE,
};
use serde::{Deserialize, Serialize};

/// Outcome of classifying one wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelVerdict {
    /// First event of a new intentional gesture.
    Accepted(Direction),
    /// Continuation of the current gesture (usually momentum).
    Suppressed,
}

impl WheelVerdict {
    pub fn direction(self) -> Option<Direction> {
        match self {
            WheelVerdict::Accepted(direction) => Some(direction),
            WheelVerdict::Suppressed => None,
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, WheelVerdict::Accepted(_))
    }
}

/// History of the gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSession {
    pub last_event_timestamp_ms: u64,
    pub last_delta_magnitude: f32,
    /// Events seen since the gesture started, including the first.
    pub event_count: u32,
}

/// Tunables for [`MomentumFilter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Gap (ms) after which the next event starts a new gesture.
    pub gesture_timeout_ms: u64,
    /// `current / last` magnitude ratio that marks a new flick.
    pub delta_spike_ratio: f32,
    /// Minimum magnitude for a spike to count.
    pub min_delta_for_new_gesture: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            gesture_timeout_ms: DEFAULT_GESTURE_TIMEOUT_MS,
            delta_spike_ratio: DEFAULT_DELTA_SPIKE_RATIO,
            min_delta_for_new_gesture: DEFAULT_MIN_DELTA_FOR_NEW_GESTURE,
        }
    }
}

/// Strategy that turns a wheel stream into discrete gesture starts.
pub trait GesturePolicy: std::fmt::Debug {
    /// Classify one event. Implementations update their history whether or
    /// not the event is accepted.
    fn classify(&mut self, sample: WheelSample) -> WheelVerdict;

    /// The gesture currently being tracked, if any.
    fn session(&self) -> Option<&GestureSession>;

    /// Forget all history; the next event is treated as the first.
    fn reset(&mut self);
}

/// Default policy: time-gap and delta-spike momentum filter.
///
/// An event starts a new gesture when it is the first event seen, when more
/// than `gesture_timeout_ms` elapsed since the previous event, or when its
/// magnitude exceeds both `min_delta_for_new_gesture` and
/// `delta_spike_ratio` times the previous magnitude. Everything else is
/// continuation.
#[derive(Debug, Clone, Default)]
pub struct MomentumFilter {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl MomentumFilter {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    fn starts_new_gesture(&self, sample: &WheelSample) -> bool {
        let Some(session) = &self.session else {
            return true;
        };

        let gap = sample
            .timestamp_ms
            .saturating_sub(session.last_event_timestamp_ms);
        if gap > self.config.gesture_timeout_ms {
            return true;
        }

        let magnitude = sample.magnitude();
        if magnitude <= self.config.min_delta_for_new_gesture {
            return false;
        }
        // A zero previous delta makes any real delta an unbounded spike.
        session.last_delta_magnitude == 0.0
            || magnitude / session.last_delta_magnitude > self.config.delta_spike_ratio
    }
}

impl GesturePolicy for MomentumFilter {
    fn classify(&mut self, sample: WheelSample) -> WheelVerdict {
        let new_gesture = self.starts_new_gesture(&sample);

        let event_count = match (&self.session, new_gesture) {
            (Some(session), false) => session.event_count.saturating_add(1),
            _ => 1,
        };
        self.session = Some(GestureSession {
            last_event_timestamp_ms: sample.timestamp_ms,
            last_delta_magnitude: sample.magnitude(),
            event_count,
        });

        if !new_gesture {
            return WheelVerdict::Suppressed;
        }
        match Direction::from_delta(sample.delta_y) {
            Some(direction) => WheelVerdict::Accepted(direction),
            None => WheelVerdict::Suppressed,
        }
    }

    fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    fn reset(&mut self) {
        self.session = None;
    }
}
