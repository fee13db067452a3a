//! In-memory catalog for tests and offline development.

use crate::api::CatalogApi;
use crate::error::CatalogError;
use async_trait::async_trait;
use ministore_commerce::catalog::{category, Product};
use ministore_commerce::ProductId;

/// A [`CatalogApi`] that serves a fixed product set without any network.
///
/// Useful for wiring up the storefront against canned data and for tests;
/// misses behave like the real service (a missing id is `NotFound`).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl InMemoryCatalog {
    /// Serve `products`, with categories derived from them.
    pub fn new(products: Vec<Product>) -> Self {
        let categories = category::derive_from_products(&products);
        Self {
            products,
            categories,
        }
    }

    /// Replace the served category list.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn fetch_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| category::matches(&p.category, category))
            .cloned()
            .collect())
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.categories.clone())
    }
}
