//! The controller's only seam to the outside world.

use crate::state::{ScrollBehavior, TransitionId};
use crate::url_sync::HistoryEntry;
use std::time::Duration;

/// Side effects the controller asks for.
///
/// A browser implementation maps these to `scrollIntoView`,
/// `history.pushState`/`replaceState` and `setTimeout`. Implementations must
/// not call back into the controller synchronously; results arrive later via
/// `on_visibility` and `on_fallback`.
pub trait NavigationHost {
    /// Bring section `index` into view.
    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior);

    /// Add a history entry without a page load.
    fn push_state(&mut self, entry: &HistoryEntry, path: &str);

    /// Replace the current history entry (used once, on mount).
    fn replace_state(&mut self, entry: &HistoryEntry, path: &str);

    /// Call `on_fallback(id)` after `after` has elapsed.
    fn schedule_fallback(&mut self, id: TransitionId, after: Duration);
}

impl<H: NavigationHost + ?Sized> NavigationHost for Box<H> {
    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        (**self).scroll_into_view(index, behavior)
    }

    fn push_state(&mut self, entry: &HistoryEntry, path: &str) {
        (**self).push_state(entry, path)
    }

    fn replace_state(&mut self, entry: &HistoryEntry, path: &str) {
        (**self).replace_state(entry, path)
    }

    fn schedule_fallback(&mut self, id: TransitionId, after: Duration) {
        (**self).schedule_fallback(id, after)
    }
}
