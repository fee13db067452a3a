//! Product catalog module.
//!
//! Contains the product record type and category helpers.

pub mod category;
mod product;

pub use product::Product;
