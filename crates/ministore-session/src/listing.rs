//! Product listing view-model.

use crate::load::{LoadState, LoadTicket, TicketCounter};
use ministore_commerce::browse::{filter, Criteria, Favorites, SortMode};
use ministore_commerce::catalog::{category, Product};
use ministore_commerce::ProductId;
use ministore_data::{CatalogApi, CatalogError};

/// User-facing message shown when the product fetch fails.
pub const FETCH_PRODUCTS_ERROR: &str = "Failed to fetch products. Please try again later.";

/// View-model for the product listing screen.
///
/// Owns the full fetched product set, the filter criteria, and the derived
/// view list. Criteria changes recompute the view list synchronously from the
/// products already in memory; only [`refresh`](Self::refresh) touches the
/// network. A result that arrives for a superseded fetch is discarded, so the
/// listing always reflects the most recent request.
#[derive(Debug, Default)]
pub struct ProductListing {
    state: LoadState<Vec<Product>>,
    categories: Vec<String>,
    criteria: Criteria,
    favorites: Favorites,
    visible: Vec<Product>,
    tickets: TicketCounter,
}

impl ProductListing {
    /// An empty listing in the loading phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new refresh, superseding any fetch still in flight.
    ///
    /// The returned ticket must be passed back to
    /// [`apply_products`](Self::apply_products) and
    /// [`apply_categories`](Self::apply_categories) with the fetch outcomes.
    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.state = LoadState::Loading;
        self.tickets.next()
    }

    /// Apply the product fetch outcome for `ticket`.
    ///
    /// Outcomes for superseded tickets are ignored. On failure the listing
    /// carries a generic user-facing message; the error detail goes to the
    /// log only.
    pub fn apply_products(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, CatalogError>,
    ) {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("discarding products for superseded refresh");
            return;
        }
        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "products loaded");
                self.state = LoadState::Ready(products);
                if self.categories.is_empty() {
                    self.derive_categories();
                }
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "products fetch failed");
                self.state = LoadState::Failed(FETCH_PRODUCTS_ERROR.to_string());
            }
        }
        self.recompute();
    }

    /// Apply the category fetch outcome for `ticket`.
    ///
    /// A failed or empty remote list falls back to the categories present in
    /// the fetched products, in first-seen order.
    pub fn apply_categories(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<String>, CatalogError>,
    ) {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("discarding categories for superseded refresh");
            return;
        }
        match result {
            Ok(categories) if !categories.is_empty() => self.categories = categories,
            Ok(_) => self.derive_categories(),
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "categories fetch failed");
                self.derive_categories();
            }
        }
    }

    /// Fetch products and categories concurrently and apply both outcomes.
    pub async fn refresh<C>(&mut self, api: &C)
    where
        C: CatalogApi + ?Sized,
    {
        let ticket = self.begin_refresh();
        let (products, categories) = futures::join!(api.fetch_products(), api.fetch_categories());
        self.apply_products(ticket, products);
        self.apply_categories(ticket, categories);
    }

    /// Select a category, `None` for all. Recomputes the view list.
    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
        self.recompute();
    }

    /// Set the search query. Recomputes the view list.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    /// Set the sort mode. Recomputes the view list.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.criteria.sort = sort;
        self.recompute();
    }

    /// Reset category, query, and sort in one step.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.recompute();
    }

    /// Toggle a product in the favorites set; returns the state after.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn state(&self) -> &LoadState<Vec<Product>> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The failure message, when the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Full product set from the last successful fetch.
    pub fn products(&self) -> &[Product] {
        self.state.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The filtered and sorted view list.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Number of products in the view list.
    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    /// Category names for the filter bar.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// How many fetched products fall in `category`; `None` counts them all.
    pub fn category_count(&self, category: Option<&str>) -> usize {
        filter::count_in_category(self.products(), category)
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    fn derive_categories(&mut self) {
        self.categories = category::derive_from_products(self.products());
    }

    fn recompute(&mut self) {
        self.visible = filter::apply(self.products(), &self.criteria);
    }
}
