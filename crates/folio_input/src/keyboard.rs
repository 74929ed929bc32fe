//! Navigation keys and the intents they map to.

use crate::raw::Direction;
use serde::{Deserialize, Serialize};

/// Keys that drive section navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(KeyCode::ArrowUp),
            "ArrowDown" => Some(KeyCode::ArrowDown),
            "PageUp" => Some(KeyCode::PageUp),
            "PageDown" => Some(KeyCode::PageDown),
            "Home" => Some(KeyCode::Home),
            "End" => Some(KeyCode::End),
            _ => None,
        }
    }
}

/// What the user asked for, independent of input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavIntent {
    /// One section up or down.
    Step(Direction),
    /// First section.
    First,
    /// Last section.
    Last,
}

impl NavIntent {
    /// Resolve to a target index given the current section and section count.
    ///
    /// Returns `None` when a step would leave `[0, count)`.
    pub fn target(self, current: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        match self {
            NavIntent::Step(Direction::Down) => current.checked_add(1).filter(|i| *i < count),
            NavIntent::Step(Direction::Up) => current.checked_sub(1),
            NavIntent::First => Some(0),
            NavIntent::Last => Some(count - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys() {
        assert_eq!(KeyCode::from_dom_key("PageDown"), Some(KeyCode::PageDown));
        assert_eq!(KeyCode::from_dom_key("End"), Some(KeyCode::End));
        assert_eq!(KeyCode::from_dom_key("a"), None);
        assert_eq!(KeyCode::from_dom_key("arrowup"), None);
    }

    #[test]
    fn intent_targets() {
        assert_eq!(NavIntent::Step(Direction::Down).target(0, 3), Some(1));
        assert_eq!(NavIntent::Step(Direction::Down).target(2, 3), None);
        assert_eq!(NavIntent::Step(Direction::Up).target(0, 3), None);
        assert_eq!(NavIntent::Step(Direction::Up).target(2, 3), Some(1));
        assert_eq!(NavIntent::First.target(2, 3), Some(0));
        assert_eq!(NavIntent::Last.target(0, 3), Some(2));
        assert_eq!(NavIntent::Last.target(0, 0), None);
    }
}
