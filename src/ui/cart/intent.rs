use rust_decimal::Decimal;

use crate::provider::Gif;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Add one unit of `gif`. An existing line keeps its original price.
    Add { gif: Gif, price: Decimal },
    /// Drop the whole line for `id`, whatever its quantity.
    Remove { id: String },
}

impl Intent for CartIntent {}
