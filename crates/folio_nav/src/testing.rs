//! In-memory host for tests and headless runs.

use crate::host::NavigationHost;
use crate::state::{ScrollBehavior, TransitionId};
use crate::url_sync::HistoryEntry;
use std::time::Duration;

/// One recorded host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ScrollIntoView {
        index: usize,
        behavior: ScrollBehavior,
    },
    PushState {
        entry: HistoryEntry,
        path: String,
    },
    ReplaceState {
        entry: HistoryEntry,
        path: String,
    },
    ScheduleFallback {
        id: TransitionId,
        after: Duration,
    },
}

/// Records every call and keeps a simple history stack.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    history: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Paths in history order, including replaced entries' final values.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn push_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::PushState { .. }))
            .count()
    }

    pub fn scrolls(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::ScrollIntoView { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Most recently scheduled fallback.
    pub fn last_fallback(&self) -> Option<TransitionId> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::ScheduleFallback { id, .. } => Some(*id),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl NavigationHost for RecordingHost {
    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        self.calls.push(HostCall::ScrollIntoView { index, behavior });
    }

    fn push_state(&mut self, entry: &HistoryEntry, path: &str) {
        self.history.push(path.to_string());
        self.calls.push(HostCall::PushState {
            entry: *entry,
            path: path.to_string(),
        });
    }

    fn replace_state(&mut self, entry: &HistoryEntry, path: &str) {
        match self.history.last_mut() {
            Some(last) => *last = path.to_string(),
            None => self.history.push(path.to_string()),
        }
        self.calls.push(HostCall::ReplaceState {
            entry: *entry,
            path: path.to_string(),
        });
    }

    fn schedule_fallback(&mut self, id: TransitionId, after: Duration) {
        self.calls.push(HostCall::ScheduleFallback { id, after });
    }
}
