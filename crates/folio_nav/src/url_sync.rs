//! Mapping between sections, paths and history entries.

use crate::routes::{Location, RouteTable};
use crate::state::ScrollBehavior;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// State attached to each history entry.
///
/// Serialises as `{ "sectionIndex": 1, "fromScroll": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub section_index: usize,
    /// Written by scroll-driven navigation rather than by a load or link.
    pub from_scroll: bool,
}

impl HistoryEntry {
    /// Extract a section index from restored history state.
    ///
    /// Only a non-negative integer `sectionIndex` is accepted; anything else
    /// (null state, foreign state objects, strings) yields `None`.
    pub fn section_from_state(state: &Value) -> Option<usize> {
        state
            .get("sectionIndex")
            .and_then(Value::as_u64)
            .and_then(|index| usize::try_from(index).ok())
    }
}

/// A location resolved to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub index: usize,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
pub struct UrlSync {
    routes: RouteTable,
}

impl UrlSync {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Resolve a location. Unknown paths resolve to nothing.
    pub fn resolve(&self, location: &Location) -> Option<ResolvedRoute> {
        let index = self.routes.index_for(&location.path)?;
        let behavior = if location.instant {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        };
        Some(ResolvedRoute { index, behavior })
    }

    /// History entry and path for a section.
    pub fn entry_for(&self, index: usize, from_scroll: bool) -> Option<(HistoryEntry, &str)> {
        let path = self.routes.path_for(index)?;
        Some((
            HistoryEntry {
                section_index: index,
                from_scroll,
            },
            path,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sync() -> UrlSync {
        UrlSync::new(RouteTable::new(["/", "/about", "/contact"], 3).unwrap())
    }

    #[test]
    fn resolve_with_instant_flag() {
        let sync = sync();
        assert_eq!(
            sync.resolve(&Location::parse("/contact?instant=true").unwrap()),
            Some(ResolvedRoute {
                index: 2,
                behavior: ScrollBehavior::Instant
            })
        );
        assert_eq!(
            sync.resolve(&Location::new("/about")).map(|r| r.behavior),
            Some(ScrollBehavior::Smooth)
        );
        assert_eq!(sync.resolve(&Location::new("/blog")), None);
    }

    #[test]
    fn entry_for_section() {
        let sync = sync();
        let (entry, path) = sync.entry_for(1, true).unwrap();
        assert_eq!(path, "/about");
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({ "sectionIndex": 1, "fromScroll": true })
        );
        assert!(sync.entry_for(3, true).is_none());
    }

    #[test]
    fn section_from_state_requires_number() {
        assert_eq!(
            HistoryEntry::section_from_state(&json!({ "sectionIndex": 2 })),
            Some(2)
        );
        assert_eq!(
            HistoryEntry::section_from_state(&json!({ "sectionIndex": "2" })),
            None
        );
        assert_eq!(
            HistoryEntry::section_from_state(&json!({ "sectionIndex": -1 })),
            None
        );
        assert_eq!(HistoryEntry::section_from_state(&Value::Null), None);
    }
}
