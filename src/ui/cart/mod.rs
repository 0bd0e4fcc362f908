//! Shopping cart feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Cart lines, one per gif id
//! - `intent.rs` - Add / Remove
//! - `reducer.rs` - State transitions (pure, synchronous)

mod intent;
mod reducer;
mod state;

pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use state::{CartItem, CartState};
