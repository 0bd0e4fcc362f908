//! Model-View-Intent (MVI) architecture primitives.
//!
//! The storefront's state container is built from these traits: each slice
//! (search results, cart) is a `UiState`, changed only by running its
//! `Reducer` over an `Intent`.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a state slice
//! - **Intent**: User actions or system events (search completions)
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
