//! Section navigation for a one-section-at-a-time scrolling presentation.
//!
//! The [`NavigationController`] is the single owner of navigation state. It
//! keeps the visible section, the browser URL and the history stack in step
//! while wheel, touch, keyboard and back/forward input arrive.
//!
//! # Architecture
//!
//! ```text
//!  wheel/touch/key ──► InputProcessor ──┐
//!  popstate / route ──► UrlSync ────────┼──► NavigationController ──► NavigationHost
//!  visibility ratios ─► ViewportObserver┘         │                   (scroll, history,
//!                                                  ▼                    fallback timer)
//!                                               NavState
//!                                  Idle | Transitioning { target, origin }
//! ```
//!
//! Only the controller talks to the host. Everything the browser does is
//! reported back through `on_*` methods, and every transition resolves either
//! by observed arrival or by the fallback timer, whichever comes first.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod observer;
pub mod routes;
pub mod state;
pub mod testing;
pub mod url_sync;

pub use config::NavConfig;
pub use controller::{NavigationController, Rejection, TransitionOutcome};
pub use error::NavError;
pub use host::NavigationHost;
pub use observer::{Arrival, ViewportObserver};
pub use routes::{Location, RouteTable};
pub use state::{
    NavPhase, NavSnapshot, NavState, ScrollBehavior, TransitionId, TransitionOrigin,
};
pub use url_sync::{HistoryEntry, ResolvedRoute, UrlSync};

pub use folio_input::{Direction, NavIntent, RawInput};

/// Visible fraction at which a section counts as reached.
pub const DEFAULT_VISIBILITY_RATIO: f32 = 0.95;

/// Time after which an unconfirmed transition is force-resolved (ms).
pub const DEFAULT_FALLBACK_MS: u64 = 1_000;

/// Query parameter that requests a transition without animation.
pub const INSTANT_QUERY_PARAM: &str = "instant";
