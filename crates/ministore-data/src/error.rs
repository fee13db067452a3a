//! Catalog client error types.

use ministore_commerce::ProductId;
use thiserror::Error;

/// Errors surfaced by the catalog client.
///
/// Every fetch is a single attempt; one of these reaches the caller on
/// failure, never a retry.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport failure, timeout, or non-success status.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The remote has no record for the requested identifier.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Response body could not be interpreted.
    #[error("could not decode catalog response: {0}")]
    Decode(String),

    /// The client configuration is unusable.
    #[error("invalid catalog client configuration: {0}")]
    Config(String),
}

impl CatalogError {
    /// Whether this is the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    /// Short kind label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Network { .. } => "network",
            CatalogError::NotFound(_) => "not_found",
            CatalogError::Decode(_) => "decode",
            CatalogError::Config(_) => "config",
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decode(e.to_string())
    }
}
