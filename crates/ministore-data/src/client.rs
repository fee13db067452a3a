//! Catalog HTTP client.

use crate::api::CatalogApi;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::wire;
use async_trait::async_trait;
use ministore_commerce::catalog::Product;
use ministore_commerce::ProductId;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

/// HTTP client for the catalog service.
///
/// Each operation issues one GET with the configured timeout. Failures
/// surface as [`CatalogError`] without retries; dropping a returned future
/// abandons the request.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(CatalogConfig::default())
    }

    /// Create a client from a configuration.
    pub fn with_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            CatalogError::Config(format!("invalid user agent {:?}: {}", config.user_agent, e))
        })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Resolve an endpoint path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::Config(format!("invalid endpoint {:?}: {}", path, e)))
    }

    /// Issue a GET, mapping transport failures.
    async fn send(&self, url: Url) -> Result<reqwest::Response, CatalogError> {
        tracing::debug!(url = %url, "catalog request");
        self.http.get(url.clone()).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else {
                e.to_string()
            };
            tracing::warn!(url = %url, error = %message, "catalog request failed");
            CatalogError::Network {
                url: url.to_string(),
                message,
            }
        })
    }

    /// Reject non-success statuses.
    fn ensure_success(response: &reqwest::Response) -> Result<(), CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        tracing::warn!(
            url = %response.url(),
            status = status.as_u16(),
            "catalog request rejected"
        );
        Err(CatalogError::Network {
            url: response.url().to_string(),
            message: format!("HTTP {}", status.as_u16()),
        })
    }

    /// Read the body, mapping transport failures.
    async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, CatalogError> {
        let url = response.url().clone();
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| CatalogError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    /// Fetch and decode a product list from `url`.
    async fn product_list(&self, url: Url) -> Result<Vec<Product>, CatalogError> {
        let response = self.send(url).await?;
        Self::ensure_success(&response)?;
        let body = Self::read_body(response).await?;
        wire::decode_product_list(&body)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint("products")?;
        self.product_list(url).await
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = self.endpoint(&format!("products/{}", id))?;
        let response = self.send(url).await?;
        if response.status().as_u16() == 404 {
            return Err(CatalogError::NotFound(id));
        }
        Self::ensure_success(&response)?;
        let body = Self::read_body(response).await?;
        match wire::decode_product(&body)? {
            Some(product) => Ok(product),
            None => Err(CatalogError::NotFound(id)),
        }
    }

    async fn fetch_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let mut url = self.endpoint("products")?;
        url.query_pairs_mut().append_pair("category", category);
        self.product_list(url).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint("products/categories")?;
        let response = self.send(url).await?;
        Self::ensure_success(&response)?;
        let body = Self::read_body(response).await?;
        wire::decode_categories(&body)
    }
}

/// Normalize and parse the base URL.
///
/// A trailing slash is required so relative joins extend the path instead
/// of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, CatalogError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| CatalogError::Config(format!("invalid base url {:?}: {}", raw, e)))
}
