//! Shopping cart module.
//!
//! Contains the cart store, line items, and order summary.

mod cart;
mod summary;

pub use cart::{parse_quantity, Cart, CartLine};
pub use summary::{OrderSummary, TAX_RATE};
