//! Product detail view-model.

use crate::load::{LoadState, LoadTicket, TicketCounter};
use ministore_commerce::catalog::Product;
use ministore_commerce::ProductId;
use ministore_data::{CatalogApi, CatalogError};

/// User-facing message shown when the detail fetch fails.
pub const FETCH_DETAIL_ERROR: &str = "Failed to fetch product details. Please try again later.";

/// User-facing message shown when the requested product does not exist.
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";

/// View-model for the product detail screen.
///
/// Runs one state machine per requested id: `Loading`, then `Ready` or
/// `Failed`. Nothing is cached across ids, and a result arriving for a
/// superseded request is discarded.
#[derive(Debug, Default)]
pub struct ProductDetail {
    state: LoadState<Product>,
    requested: Option<ProductId>,
    tickets: TicketCounter,
}

impl ProductDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `id`, superseding any request still in flight.
    pub fn begin_load(&mut self, id: ProductId) -> LoadTicket {
        self.requested = Some(id);
        self.state = LoadState::Loading;
        self.tickets.next()
    }

    /// Apply a fetch outcome for `ticket`. Outcomes for superseded tickets
    /// are ignored.
    ///
    /// A missing product gets its own message; every other failure collapses
    /// to a generic one, with the error detail in the log only.
    pub fn apply(&mut self, ticket: LoadTicket, result: Result<Product, CatalogError>) {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("discarding detail for superseded request");
            return;
        }
        match result {
            Ok(product) => {
                tracing::debug!(id = product.id.value(), "product detail loaded");
                self.state = LoadState::Ready(product);
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "detail fetch failed");
                let message = if err.is_not_found() {
                    PRODUCT_NOT_FOUND
                } else {
                    FETCH_DETAIL_ERROR
                };
                self.state = LoadState::Failed(message.to_string());
            }
        }
    }

    /// Fetch `id` and apply the outcome.
    pub async fn load<C>(&mut self, api: &C, id: ProductId)
    where
        C: CatalogApi + ?Sized,
    {
        let ticket = self.begin_load(id);
        let result = api.fetch_product(id).await;
        self.apply(ticket, result);
    }

    /// The id most recently requested.
    pub fn requested(&self) -> Option<ProductId> {
        self.requested
    }

    pub fn state(&self) -> &LoadState<Product> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The loaded product, when ready.
    pub fn product(&self) -> Option<&Product> {
        self.state.ready()
    }

    /// The failure message, when the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}
