//! Intents for the search results slice.

use crate::ui::mvi::Intent;

use super::dispatch::SearchOutcome;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// A search was issued. `request_id` must be greater than every id issued
    /// before it; older ids are ignored.
    Started { query: String, request_id: u64 },

    /// The provider call for `request_id` finished.
    Completed {
        request_id: u64,
        outcome: SearchOutcome,
    },
}

impl Intent for SearchIntent {}
