use rust_decimal::Decimal;

use crate::provider::Gif;
use crate::ui::mvi::UiState;

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub gif: Gif,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
    /// Unit price fixed when the line was created.
    pub price: Decimal,
}

impl CartItem {
    /// Unit price × quantity, saturating at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    /// Lines in insertion order, unique by `gif.id`.
    pub items: Vec<CartItem>,
}

impl UiState for CartState {}

impl CartState {
    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.gif.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
