//! Viewport arrival detection.
//!
//! The host reports visibility ratios (typically from an
//! `IntersectionObserver`); the observer decides which of those reports mean
//! "the viewport has settled on a section", depending on what the navigation
//! state is waiting for.

use crate::state::{NavState, TransitionOrigin};
use crate::DEFAULT_VISIBILITY_RATIO;

/// A confirmed arrival, tagged with the mode that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// The section matched on mount became visible.
    InitialTarget(usize),
    /// The target of a directed transition became visible.
    Target(usize),
    /// Ordinary scrolling brought a different section into view.
    Ambient(usize),
}

impl Arrival {
    pub fn section(self) -> usize {
        match self {
            Arrival::InitialTarget(i) | Arrival::Target(i) | Arrival::Ambient(i) => i,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewportObserver {
    visibility_ratio: f32,
    section_count: usize,
}

impl ViewportObserver {
    pub fn new(section_count: usize) -> Self {
        Self::with_ratio(section_count, DEFAULT_VISIBILITY_RATIO)
    }

    pub fn with_ratio(section_count: usize, visibility_ratio: f32) -> Self {
        Self {
            visibility_ratio,
            section_count,
        }
    }

    pub fn visibility_ratio(&self) -> f32 {
        self.visibility_ratio
    }

    /// Classify a visibility report for `section`.
    ///
    /// - Initial load: only the mount target counts.
    /// - Directed transition: only the target counts, and only if it differs
    ///   from the current section.
    /// - Idle: any other section crossing the threshold becomes current.
    pub fn classify(&self, section: usize, ratio: f32, state: &NavState) -> Option<Arrival> {
        if section >= self.section_count || ratio.is_nan() || ratio < self.visibility_ratio {
            return None;
        }

        match (state.target(), state.origin()) {
            (Some(target), Some(TransitionOrigin::InitialLoad)) => {
                (section == target).then_some(Arrival::InitialTarget(section))
            }
            (Some(target), Some(_)) => {
                (section == target && target != state.current).then_some(Arrival::Target(section))
            }
            _ => (section != state.current).then_some(Arrival::Ambient(section)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NavPhase, ScrollBehavior, TransitionId};

    fn transitioning(current: usize, target: usize, origin: TransitionOrigin) -> NavState {
        NavState {
            current,
            phase: NavPhase::Transitioning {
                id: TransitionId(1),
                target,
                origin,
                behavior: ScrollBehavior::Smooth,
            },
        }
    }

    #[test]
    fn below_threshold_is_ignored() {
        let observer = ViewportObserver::new(3);
        assert_eq!(observer.classify(1, 0.94, &NavState::idle(0)), None);
        assert_eq!(observer.classify(1, f32::NAN, &NavState::idle(0)), None);
        assert_eq!(
            observer.classify(1, 0.95, &NavState::idle(0)),
            Some(Arrival::Ambient(1))
        );
    }

    #[test]
    fn initial_load_waits_for_target_only() {
        let observer = ViewportObserver::new(3);
        let state = transitioning(1, 1, TransitionOrigin::InitialLoad);

        assert_eq!(observer.classify(0, 1.0, &state), None);
        assert_eq!(
            observer.classify(1, 1.0, &state),
            Some(Arrival::InitialTarget(1))
        );
    }

    #[test]
    fn directed_transition_ignores_passing_sections() {
        let observer = ViewportObserver::new(4);
        let state = transitioning(0, 3, TransitionOrigin::User);

        // Scrolling from 0 to 3 passes through 1 and 2
        assert_eq!(observer.classify(1, 1.0, &state), None);
        assert_eq!(observer.classify(2, 1.0, &state), None);
        assert_eq!(observer.classify(3, 0.97, &state), Some(Arrival::Target(3)));
    }

    #[test]
    fn idle_ignores_current_section() {
        let observer = ViewportObserver::new(3);
        assert_eq!(observer.classify(2, 1.0, &NavState::idle(2)), None);
        assert_eq!(observer.classify(5, 1.0, &NavState::idle(2)), None);
    }
}
