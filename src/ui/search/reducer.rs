//! Reducer for the search results slice.

use crate::ui::mvi::Reducer;

use super::dispatch::SearchOutcome;
use super::intent::SearchIntent;
use super::state::{SearchState, SearchStatus};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Started { query, request_id } => {
                if request_id <= state.latest_request {
                    return state;
                }
                // Previous results stay on screen until the new ones land.
                SearchState {
                    query,
                    status: SearchStatus::Searching { request_id },
                    latest_request: request_id,
                    ..state
                }
            }

            SearchIntent::Completed {
                request_id,
                outcome,
            } => {
                let awaiting = matches!(
                    state.status,
                    SearchStatus::Searching { request_id: pending } if pending == request_id
                );
                if !awaiting || request_id != state.latest_request {
                    return state;
                }
                match outcome {
                    SearchOutcome::Found(gifs) => SearchState {
                        gifs,
                        status: SearchStatus::Loaded,
                        ..state
                    },
                    SearchOutcome::Failed { reason } => SearchState {
                        gifs: Vec::new(),
                        status: SearchStatus::Failed { reason },
                        ..state
                    },
                }
            }
        }
    }
}
