//! Terminal storefront: state slices, event loop and widgets.

pub mod app;
pub mod cart;
pub mod cart_view;
pub mod events;
pub mod footer;
pub mod grid;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod search_bar;
pub mod selectors;
pub mod terminal_guard;
pub mod theme;
