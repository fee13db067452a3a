//! Storefront domain types and logic for MiniStore.
//!
//! This crate provides the session-scoped core of the storefront:
//!
//! - **Catalog**: the product record and category helpers
//! - **Cart**: shopping cart with line items and an order summary
//! - **Browse**: filter/search/sort criteria and the derived view list
//!
//! # Example
//!
//! ```rust,ignore
//! use ministore_commerce::prelude::*;
//!
//! // Add a fetched product to the session cart
//! let mut cart = Cart::new();
//! cart.add(&product);
//! assert_eq!(cart.item_count(), 1);
//!
//! // Derive the visible list from criteria
//! let criteria = Criteria::new()
//!     .with_category("audio")
//!     .with_sort(SortMode::PriceAsc);
//! let visible = filter::apply(&products, &criteria);
//! ```

pub mod ids;

pub mod browse;
pub mod cart;
pub mod catalog;

pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{category, Product};

    // Cart
    pub use crate::cart::{parse_quantity, Cart, CartLine, OrderSummary, TAX_RATE};

    // Browse
    pub use crate::browse::{filter, Criteria, Favorites, SortMode};
}
