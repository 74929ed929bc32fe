//! Navigation state.
//!
//! The phase is a tagged union, so "transitioning without a target" or "a
//! target while idle" cannot be expressed.

use serde::{Deserialize, Serialize};

/// Identifies one transition so a late fallback timer can be recognised as
/// stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionId(pub u64);

impl std::fmt::Display for TransitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How the host should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Who asked for a transition. Decides whether arrival writes history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionOrigin {
    /// Settling on the route-matched section after mount. Never pushes.
    InitialLoad,
    /// Wheel, touch, key or programmatic request. Pushes on arrival.
    User,
    /// Route change or back/forward. The URL is already right; never pushes.
    External,
}

impl TransitionOrigin {
    pub fn pushes_history(self) -> bool {
        matches!(self, TransitionOrigin::User)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavPhase {
    Idle,
    Transitioning {
        id: TransitionId,
        target: usize,
        origin: TransitionOrigin,
        behavior: ScrollBehavior,
    },
}

/// Current section plus phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Changes only on confirmed arrival or fallback, never optimistically.
    pub current: usize,
    pub phase: NavPhase,
}

impl NavState {
    pub fn idle(current: usize) -> Self {
        Self {
            current,
            phase: NavPhase::Idle,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, NavPhase::Transitioning { .. })
    }

    pub fn target(&self) -> Option<usize> {
        match self.phase {
            NavPhase::Transitioning { target, .. } => Some(target),
            NavPhase::Idle => None,
        }
    }

    pub fn origin(&self) -> Option<TransitionOrigin> {
        match self.phase {
            NavPhase::Transitioning { origin, .. } => Some(origin),
            NavPhase::Idle => None,
        }
    }

    /// True until the section matched on mount has been confirmed.
    pub fn is_initial_load(&self) -> bool {
        self.origin() == Some(TransitionOrigin::InitialLoad)
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            current_section: self.current,
            is_transitioning: self.is_transitioning(),
            target_section: self.target(),
            is_initial_load: self.is_initial_load(),
        }
    }
}

/// Flat, serialisable view of [`NavState`] for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSnapshot {
    pub current_section: usize,
    pub is_transitioning: bool,
    pub target_section: Option<usize>,
    pub is_initial_load: bool,
}
