//! Catalog API seam.

use crate::error::CatalogError;
use async_trait::async_trait;
use ministore_commerce::catalog::Product;
use ministore_commerce::ProductId;

/// The catalog operations the storefront consumes.
///
/// [`CatalogClient`](crate::CatalogClient) implements this over HTTP; tests
/// substitute in-memory fakes. Every call is asynchronous, makes a single
/// attempt, and is cancelled by dropping the future.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full product list, in catalog order.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch one product by id.
    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetch the products of one category, filtered server-side.
    async fn fetch_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError>;

    /// Fetch the category names, in remote order.
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
}
