//! Async search dispatch.
//!
//! This is the only place where network I/O and state meet: the provider
//! result is folded into a [`SearchOutcome`], which the reducer applies.

use tracing::{info, warn};

use crate::provider::{Gif, GiphyClient};

/// Result of one search, as seen by the state slice.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<Gif>),
    /// The provider call failed. The slice shows no results and keeps the
    /// reason for the status line.
    Failed { reason: String },
}

/// Run one provider search. Never fails: errors become `SearchOutcome::Failed`.
pub async fn run_search(client: &GiphyClient, query: &str, limit: Option<u32>) -> SearchOutcome {
    match client.search(query, limit).await {
        Ok(gifs) => {
            info!(query, count = gifs.len(), "Search completed");
            SearchOutcome::Found(gifs)
        }
        Err(err) => {
            warn!(query, kind = err.kind(), error = %err, "Search failed");
            SearchOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

/// Issues strictly increasing search request ids, starting at 1.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_increase_from_one() {
        let mut seq = RequestSequence::new();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.next_id(), 3);
    }
}
