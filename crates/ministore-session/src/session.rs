//! Session aggregate handed to the presentation layer.

use crate::detail::ProductDetail;
use crate::listing::ProductListing;
use ministore_commerce::cart::Cart;

/// Owns all storefront session state: the cart, the listing view-model, and
/// the detail view-model.
///
/// One instance lives for the duration of a shopping session and is passed
/// to whatever drives the UI; nothing here is global or persisted.
#[derive(Debug, Default)]
pub struct StorefrontSession {
    /// The shopping cart.
    pub cart: Cart,
    /// Product listing view-model.
    pub listing: ProductListing,
    /// Product detail view-model.
    pub detail: ProductDetail,
}

impl StorefrontSession {
    /// A fresh session: empty cart, listing and detail in the loading phase.
    pub fn new() -> Self {
        Self::default()
    }
}
