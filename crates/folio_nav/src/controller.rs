//! Navigation controller - the only mutator of navigation state.
//!
//! Per section change the state moves `Idle → Transitioning → Idle`. A
//! transition ends on observed arrival or on the fallback timer, whichever
//! fires first; the loser finds the state already resolved and does nothing.

use crate::config::NavConfig;
use crate::error::NavError;
use crate::host::NavigationHost;
use crate::observer::{Arrival, ViewportObserver};
use crate::routes::{Location, RouteTable};
use crate::state::{
    NavPhase, NavSnapshot, NavState, ScrollBehavior, TransitionId, TransitionOrigin,
};
use crate::url_sync::{HistoryEntry, UrlSync};
use folio_input::{GesturePolicy, InputProcessor, MomentumFilter, NavIntent, RawInput};
use serde_json::Value;
use std::time::Duration;

/// Why a transition request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Index outside `[0, section_count)`.
    OutOfRange { index: usize, section_count: usize },
    /// A step past the first or last section.
    AtBoundary,
    /// Another transition is in flight.
    InFlight { target: usize },
    /// Already on that section.
    AlreadyCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Started(TransitionId),
    Rejected(Rejection),
}

impl TransitionOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, TransitionOutcome::Started(_))
    }
}

/// Owns navigation state and the host.
#[derive(Debug)]
pub struct NavigationController<H: NavigationHost> {
    sync: UrlSync,
    observer: ViewportObserver,
    input: InputProcessor,
    state: NavState,
    fallback: Duration,
    next_id: u64,
    host: H,
}

impl<H: NavigationHost> NavigationController<H> {
    /// Validate `config` and settle on the section matching `location`.
    ///
    /// A known path becomes the current section, replaces the initial history
    /// entry and is scrolled into view; the controller stays in the
    /// initial-load phase until arrival or fallback. An unknown path starts
    /// no transition: section 0 is current, the phase is idle and neither DOM
    /// nor history is touched.
    pub fn mount(config: NavConfig, host: H, location: &Location) -> Result<Self, NavError> {
        let policy = Box::new(MomentumFilter::with_config(config.input.gesture.clone()));
        Self::mount_with_policy(config, host, location, policy)
    }

    /// [`mount`](Self::mount) with a custom wheel gesture policy.
    pub fn mount_with_policy(
        config: NavConfig,
        host: H,
        location: &Location,
        policy: Box<dyn GesturePolicy>,
    ) -> Result<Self, NavError> {
        config.validate()?;
        let routes = config.route_table()?;

        let mut controller = Self {
            observer: ViewportObserver::with_ratio(routes.len(), config.visibility_ratio),
            sync: UrlSync::new(routes),
            input: InputProcessor::with_policy(config.input.clone(), policy),
            state: NavState::idle(0),
            fallback: config.fallback(),
            next_id: 0,
            host,
        };

        match controller.sync.resolve(location) {
            Some(route) => {
                controller.state.current = route.index;
                if let Some((entry, path)) = controller.sync.entry_for(route.index, false) {
                    controller.host.replace_state(&entry, path);
                }
                controller.begin(
                    route.index,
                    route.behavior,
                    TransitionOrigin::InitialLoad,
                    true,
                );
            }
            None => {
                tracing::debug!(path = %location.path, "no route for initial path");
            }
        }

        Ok(controller)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn snapshot(&self) -> NavSnapshot {
        self.state.snapshot()
    }

    pub fn current_section(&self) -> usize {
        self.state.current
    }

    pub fn target_section(&self) -> Option<usize> {
        self.state.target()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn is_initial_load(&self) -> bool {
        self.state.is_initial_load()
    }

    pub fn section_count(&self) -> usize {
        self.sync.routes().len()
    }

    pub fn routes(&self) -> &RouteTable {
        self.sync.routes()
    }

    pub fn observer(&self) -> &ViewportObserver {
        &self.observer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // =========================================================================
    // REQUESTS
    // =========================================================================

    /// Smoothly scroll to `index` on the user's behalf.
    pub fn scroll_to_section(&mut self, index: usize) -> TransitionOutcome {
        self.scroll_to_section_with(index, ScrollBehavior::Smooth, TransitionOrigin::User)
    }

    /// Start a transition. Rejected requests leave state and host untouched.
    pub fn scroll_to_section_with(
        &mut self,
        index: usize,
        behavior: ScrollBehavior,
        origin: TransitionOrigin,
    ) -> TransitionOutcome {
        let section_count = self.section_count();
        let rejection = if index >= section_count {
            Some(Rejection::OutOfRange {
                index,
                section_count,
            })
        } else if let Some(target) = self.state.target() {
            Some(Rejection::InFlight { target })
        } else if index == self.state.current {
            Some(Rejection::AlreadyCurrent)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            tracing::debug!(index, ?rejection, "transition rejected");
            return TransitionOutcome::Rejected(rejection);
        }

        TransitionOutcome::Started(self.begin(index, behavior, origin, true))
    }

    /// Resolve an intent against the current section and scroll there.
    pub fn apply_intent(&mut self, intent: NavIntent) -> TransitionOutcome {
        match intent.target(self.state.current, self.section_count()) {
            Some(index) => self.scroll_to_section(index),
            None => {
                tracing::debug!(?intent, current = self.state.current, "intent at boundary");
                TransitionOutcome::Rejected(Rejection::AtBoundary)
            }
        }
    }

    /// Feed raw input. Returns `None` when the input produced no intent
    /// (momentum, throttled, unbound key).
    ///
    /// The throttle cooldown starts only when the intent becomes a
    /// transition; a rejected intent leaves the next gesture free to act.
    pub fn handle_input(&mut self, input: RawInput, now_ms: u64) -> Option<TransitionOutcome> {
        let intent = self.input.interpret(input, now_ms)?;
        let outcome = self.apply_intent(intent);
        if outcome.is_started() {
            self.input.accept(now_ms);
        }
        Some(outcome)
    }

    // =========================================================================
    // NOTIFICATIONS FROM THE HOST
    // =========================================================================

    /// A section's visible ratio changed.
    pub fn on_visibility(&mut self, section: usize, ratio: f32) -> Option<Arrival> {
        let arrival = self.observer.classify(section, ratio, &self.state)?;
        self.arrive(arrival);
        Some(arrival)
    }

    /// `section` is fully in view. Duplicate calls are no-ops.
    pub fn on_arrival(&mut self, section: usize) -> Option<Arrival> {
        self.on_visibility(section, 1.0)
    }

    /// The fallback timer for `id` fired. Stale ids are ignored.
    pub fn on_fallback(&mut self, id: TransitionId) -> bool {
        match self.state.phase {
            NavPhase::Transitioning {
                id: active,
                target,
                origin,
                ..
            } if active == id => {
                tracing::warn!(%id, target, "arrival not observed; forcing transition");
                self.state = NavState::idle(target);
                if origin.pushes_history() {
                    self.push(target);
                }
                true
            }
            _ => {
                tracing::trace!(%id, "stale fallback ignored");
                false
            }
        }
    }

    /// A same-origin link to `location` was followed.
    ///
    /// The link is itself a navigation, so a started transition writes a
    /// router-style history entry (`fromScroll: false`) for it. Arrival does
    /// not push again. Rejected clicks leave URL and history alone, and
    /// unknown paths return `None` so the host can let the browser handle
    /// them.
    pub fn on_link(&mut self, location: &Location) -> Option<TransitionOutcome> {
        let route = self.sync.resolve(location)?;
        let outcome =
            self.scroll_to_section_with(route.index, route.behavior, TransitionOrigin::External);
        if outcome.is_started() {
            if let Some((entry, path)) = self.sync.entry_for(route.index, false) {
                self.host.push_state(&entry, path);
            }
        }
        Some(outcome)
    }

    /// The route changed outside the controller (router, address bar).
    pub fn on_route_change(&mut self, location: &Location) -> Option<TransitionOutcome> {
        let Some(route) = self.sync.resolve(location) else {
            tracing::debug!(path = %location.path, "route change to unknown path");
            return None;
        };
        Some(self.scroll_to_section_with(route.index, route.behavior, TransitionOrigin::External))
    }

    /// Back/forward navigation. Prefers the section stored in history state
    /// and falls back to the restored path.
    pub fn on_history_pop(
        &mut self,
        state: Option<&Value>,
        location: &Location,
    ) -> Option<TransitionOutcome> {
        let index = state
            .and_then(HistoryEntry::section_from_state)
            .or_else(|| self.sync.resolve(location).map(|route| route.index))?;

        let behavior = if location.instant {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        };
        Some(self.scroll_to_section_with(index, behavior, TransitionOrigin::External))
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn begin(
        &mut self,
        target: usize,
        behavior: ScrollBehavior,
        origin: TransitionOrigin,
        scroll: bool,
    ) -> TransitionId {
        self.next_id += 1;
        let id = TransitionId(self.next_id);

        self.state.phase = NavPhase::Transitioning {
            id,
            target,
            origin,
            behavior,
        };
        if scroll {
            self.host.scroll_into_view(target, behavior);
        }
        self.host.schedule_fallback(id, self.fallback);

        tracing::debug!(%id, target, ?origin, ?behavior, "transition started");
        id
    }

    fn arrive(&mut self, arrival: Arrival) {
        let origin = self.state.origin();
        let section = arrival.section();
        self.state = NavState::idle(section);

        let push = match arrival {
            Arrival::InitialTarget(_) => false,
            Arrival::Target(_) => origin.is_some_and(TransitionOrigin::pushes_history),
            Arrival::Ambient(_) => true,
        };
        if push {
            self.push(section);
        }

        tracing::info!(section, ?arrival, "section reached");
    }

    fn push(&mut self, section: usize) {
        if let Some((entry, path)) = self.sync.entry_for(section, true) {
            self.host.push_state(&entry, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{HostCall, RecordingHost};
    use folio_input::Direction;
    use pretty_assertions::assert_eq;

    fn mounted(path: &str) -> NavigationController<RecordingHost> {
        let config = NavConfig::new(["/", "/about", "/experience", "/contact"]);
        NavigationController::mount(config, RecordingHost::new(), &Location::parse(path).unwrap())
            .unwrap()
    }

    fn settled(path: &str) -> NavigationController<RecordingHost> {
        let mut nav = mounted(path);
        let current = nav.current_section();
        nav.on_arrival(current);
        nav.host_mut().clear();
        nav
    }

    #[test]
    fn mount_on_known_path() {
        let nav = mounted("/experience?instant=true");
        assert_eq!(nav.current_section(), 2);
        assert!(nav.is_initial_load());
        assert_eq!(
            nav.host().calls(),
            &[
                HostCall::ReplaceState {
                    entry: HistoryEntry {
                        section_index: 2,
                        from_scroll: false
                    },
                    path: "/experience".to_string(),
                },
                HostCall::ScrollIntoView {
                    index: 2,
                    behavior: ScrollBehavior::Instant
                },
                HostCall::ScheduleFallback {
                    id: TransitionId(1),
                    after: Duration::from_millis(1_000)
                },
            ]
        );
    }

    #[test]
    fn mount_on_unknown_path_touches_nothing() {
        let mut nav = mounted("/nope");
        assert_eq!(
            nav.snapshot(),
            NavSnapshot {
                current_section: 0,
                is_transitioning: false,
                target_section: None,
                is_initial_load: false,
            }
        );
        assert!(nav.host().calls().is_empty());

        // Ordinary scrolling is tracked straight away
        assert_eq!(nav.on_visibility(1, 1.0), Some(Arrival::Ambient(1)));
        assert!(nav.scroll_to_section(2).is_started());
    }

    #[test]
    fn rejections() {
        let mut nav = settled("/");
        assert_eq!(
            nav.scroll_to_section(9),
            TransitionOutcome::Rejected(Rejection::OutOfRange {
                index: 9,
                section_count: 4
            })
        );
        assert_eq!(
            nav.scroll_to_section(0),
            TransitionOutcome::Rejected(Rejection::AlreadyCurrent)
        );
        assert_eq!(
            nav.apply_intent(NavIntent::Step(Direction::Up)),
            TransitionOutcome::Rejected(Rejection::AtBoundary)
        );
        assert!(nav.host().calls().is_empty());

        assert!(nav.scroll_to_section(3).is_started());
        assert_eq!(
            nav.scroll_to_section(1),
            TransitionOutcome::Rejected(Rejection::InFlight { target: 3 })
        );
    }

    #[test]
    fn arrival_pushes_once() {
        let mut nav = settled("/");
        nav.scroll_to_section(1);

        assert_eq!(nav.on_visibility(1, 0.5), None);
        assert_eq!(nav.on_arrival(1), Some(Arrival::Target(1)));
        assert_eq!(nav.on_arrival(1), None);

        assert_eq!(nav.current_section(), 1);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.host().push_count(), 1);
        assert_eq!(nav.host().history(), &["/".to_string(), "/about".to_string()]);
    }

    #[test]
    fn fallback_after_arrival_is_stale() {
        let mut nav = settled("/");
        let TransitionOutcome::Started(id) = nav.scroll_to_section(2) else {
            panic!("expected transition");
        };
        nav.on_arrival(2);
        assert!(!nav.on_fallback(id));
        assert_eq!(nav.host().push_count(), 1);
    }

    #[test]
    fn ambient_scroll_updates_url() {
        let mut nav = settled("/");
        assert_eq!(nav.on_visibility(1, 0.99), Some(Arrival::Ambient(1)));
        assert_eq!(nav.current_section(), 1);
        assert_eq!(nav.host().push_count(), 1);
    }

    #[test]
    fn external_navigation_never_pushes() {
        let mut nav = settled("/");
        let outcome = nav.on_history_pop(
            Some(&serde_json::json!({ "sectionIndex": 3, "fromScroll": true })),
            &Location::new("/contact"),
        );
        assert!(matches!(outcome, Some(TransitionOutcome::Started(_))));
        nav.on_arrival(3);
        assert_eq!(nav.current_section(), 3);
        assert_eq!(nav.host().push_count(), 0);

        let outcome = nav.on_route_change(&Location::parse("/about?instant=true").unwrap());
        assert!(matches!(outcome, Some(TransitionOutcome::Started(_))));
        assert!(nav.host().calls().contains(&HostCall::ScrollIntoView {
            index: 1,
            behavior: ScrollBehavior::Instant
        }));
        assert_eq!(nav.on_route_change(&Location::new("/blog")), None);
    }

    #[test]
    fn pop_without_state_uses_path() {
        let mut nav = settled("/");
        let outcome = nav.on_history_pop(None, &Location::new("/experience"));
        assert!(matches!(outcome, Some(TransitionOutcome::Started(_))));
        assert_eq!(nav.target_section(), Some(2));

        let mut nav = settled("/");
        assert_eq!(nav.on_history_pop(None, &Location::new("/unknown")), None);
    }

    #[test]
    fn input_drives_transitions() {
        let mut nav = settled("/");
        let outcome = nav.handle_input(RawInput::wheel(10_000, 60.0), 10_000);
        assert!(matches!(outcome, Some(TransitionOutcome::Started(_))));
        assert_eq!(nav.target_section(), Some(1));

        // Momentum tail produces nothing
        assert_eq!(nav.handle_input(RawInput::wheel(10_016, 50.0), 10_016), None);
    }

    #[test]
    fn rejected_input_leaves_throttle_open() {
        let mut nav = settled("/");
        assert_eq!(
            nav.handle_input(RawInput::wheel(10_000, -60.0), 10_000),
            Some(TransitionOutcome::Rejected(Rejection::AtBoundary))
        );
        assert!(!nav.input.throttle().is_throttled(10_300));

        // New gesture in the opposite direction, well inside the cooldown
        let outcome = nav.handle_input(RawInput::wheel(10_300, 60.0), 10_300);
        assert!(matches!(outcome, Some(TransitionOutcome::Started(_))));
        assert_eq!(nav.target_section(), Some(1));
    }

    #[test]
    fn link_pushes_only_when_started() {
        let mut nav = settled("/about");

        // Self link: no transition, no duplicate entry
        assert_eq!(
            nav.on_link(&Location::new("/about")),
            Some(TransitionOutcome::Rejected(Rejection::AlreadyCurrent))
        );
        assert!(nav.host().calls().is_empty());

        let outcome = nav.on_link(&Location::new("/contact"));
        assert!(matches!(outcome, Some(TransitionOutcome::Started(_))));
        assert!(nav.host().calls().contains(&HostCall::PushState {
            entry: HistoryEntry {
                section_index: 3,
                from_scroll: false
            },
            path: "/contact".to_string(),
        }));
        assert_eq!(nav.host().push_count(), 1);

        // Clicked mid-flight: URL stays where the transition is going
        assert_eq!(
            nav.on_link(&Location::new("/experience")),
            Some(TransitionOutcome::Rejected(Rejection::InFlight { target: 3 }))
        );
        assert_eq!(nav.host().push_count(), 1);

        nav.on_arrival(3);
        assert_eq!(nav.host().push_count(), 1);
        assert_eq!(nav.on_link(&Location::new("/blog")), None);
    }
}
