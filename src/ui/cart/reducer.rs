use crate::ui::cart::intent::CartIntent;
use crate::ui::cart::state::{CartItem, CartState};
use crate::ui::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Add { gif, price } => {
                match state.items.iter_mut().find(|item| item.gif.id == gif.id) {
                    Some(existing) => {
                        existing.quantity = existing.quantity.saturating_add(1);
                    }
                    None => state.items.push(CartItem {
                        gif,
                        quantity: 1,
                        price,
                    }),
                }
                state
            }
            CartIntent::Remove { id } => {
                state.items.retain(|item| item.gif.id != id);
                state
            }
        }
    }
}
