//! Giphy search client.
//!
//! The client performs exactly one outbound request per search and maps the
//! provider's JSON into [`Gif`] records. Every failure is returned as a typed
//! [`ProviderError`]; nothing is retried or cached.

mod client;
mod error;
mod types;

pub use client::{GiphyClient, SEARCH_PATH};
pub use error::ProviderError;
pub use types::Gif;
