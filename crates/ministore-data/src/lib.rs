//! Catalog data access for MiniStore.
//!
//! An async client for the remote product catalog: typed fetch operations,
//! one fixed-timeout attempt per call, and tolerance for the service's
//! envelope inconsistencies kept behind the [`wire`] module so the rest of
//! the storefront only sees canonical records.
//!
//! # Example
//!
//! ```rust,ignore
//! use ministore_data::{CatalogApi, CatalogClient};
//!
//! let client = CatalogClient::new()?;
//! let products = client.fetch_products().await?;
//! let lamp = client.fetch_product(products[0].id).await?;
//! ```

mod api;
mod client;
mod config;
mod error;
mod memory;
pub mod wire;

pub use api::CatalogApi;
pub use client::CatalogClient;
pub use config::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::CatalogError;
pub use memory::InMemoryCatalog;
