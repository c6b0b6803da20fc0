//! Pagination controller models

use std::fmt;

/// `Idle -> Loading -> Idle | Exhausted`. `Exhausted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Loading,
    Exhausted,
}

impl fmt::Display for FeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedState::Idle => "idle",
            FeedState::Loading => "loading",
            FeedState::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Result of a `load_more` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A batch was appended
    Loaded { added: usize, total: usize },
    /// Another load is in flight; nothing happened
    Busy,
    /// The cap was reached earlier; nothing happened
    Exhausted,
}
