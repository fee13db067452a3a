//! Browse module.
//!
//! Criteria, filtering, sorting, and favorites for the product listing.

mod criteria;
mod favorites;
pub mod filter;

pub use criteria::{Criteria, SortMode};
pub use favorites::Favorites;
