use crate::provider::Gif;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchStatus {
    /// No search has been submitted yet.
    #[default]
    Idle,
    /// Waiting on the provider for `request_id`.
    Searching { request_id: u64 },
    /// The latest search completed; `gifs` holds its results.
    Loaded,
    /// The latest search failed; `gifs` is empty.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Query of the most recently issued search.
    pub query: String,
    /// Results of the most recently completed search, in provider order.
    pub gifs: Vec<Gif>,
    pub status: SearchStatus,
    /// Id of the most recently issued search. Completions for any other id
    /// are stale and dropped.
    pub latest_request: u64,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        matches!(self.status, SearchStatus::Searching { .. })
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}
