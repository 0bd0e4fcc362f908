//! Search results feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Current query, results and request status
//! - `intent.rs` - Search started / search completed events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `dispatch.rs` - The async half: runs the provider call and turns its
//!   result into a `SearchOutcome` for the reducer

mod dispatch;
mod intent;
mod reducer;
mod state;

pub use dispatch::{run_search, RequestSequence, SearchOutcome};
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchState, SearchStatus};
