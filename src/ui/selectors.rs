//! Derived read-only views over the state slices.
//!
//! Nothing here is stored: every value is recomputed from the slice on each
//! read, which is linear in the number of cart lines.

use rust_decimal::Decimal;

use crate::provider::Gif;
use crate::ui::cart::{CartItem, CartState};
use crate::ui::search::SearchState;

pub fn select_gifs(search: &SearchState) -> &[Gif] {
    &search.gifs
}

pub fn select_cart_items(cart: &CartState) -> &[CartItem] {
    &cart.items
}

/// Sum of unit price × quantity over every line, saturating at `Decimal::MAX`.
pub fn cart_total(cart: &CartState) -> Decimal {
    cart.items
        .iter()
        .map(CartItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Number of units across all lines.
pub fn cart_quantity(cart: &CartState) -> u64 {
    cart.items.iter().map(|item| u64::from(item.quantity)).sum()
}

pub fn cart_line_count(cart: &CartState) -> usize {
    cart.items.len()
}

pub fn cart_contains(cart: &CartState, id: &str) -> bool {
    cart.find(id).is_some()
}
