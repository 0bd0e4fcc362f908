//! Gif Market: a terminal storefront for Giphy search results.
//!
//! - [`provider`] talks to the Giphy search API.
//! - [`ui`] holds the state slices (search results, cart), their reducers and
//!   selectors, and the ratatui front end.
//! - [`config`], [`logging`] and [`cli`] are the application shell.

pub mod cli;
pub mod config;
pub mod logging;
pub mod provider;
pub mod ui;
