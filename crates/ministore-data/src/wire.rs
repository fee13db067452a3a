//! Wire-format decoding for catalog responses.
//!
//! The upstream service is inconsistent about envelopes: product lists
//! arrive either as a bare JSON array or wrapped in an object, and single
//! products arrive bare or wrapped. All of that tolerance lives here; the
//! rest of the crate only sees canonical values.

use crate::error::CatalogError;
use ministore_commerce::catalog::Product;
use serde::Deserialize;
use serde_json::Value;

/// Product list, bare or wrapped in `{"products": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProductListPayload {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

/// Category list, bare or wrapped in `{"categories": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryListPayload {
    Bare(Vec<String>),
    Wrapped { categories: Vec<String> },
}

/// Decode a product-list body into canonical `Vec<Product>`.
pub fn decode_product_list(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    let payload: ProductListPayload = serde_json::from_slice(body)?;
    Ok(match payload {
        ProductListPayload::Bare(products) => products,
        ProductListPayload::Wrapped { products } => products,
    })
}

/// Decode a single-product body.
///
/// `Ok(None)` means the remote answered but has no record: a `null` body or
/// an envelope whose `product` field is null. A body that cannot be read as
/// a product at all is a decode failure, not a miss.
pub fn decode_product(body: &[u8]) -> Result<Option<Product>, CatalogError> {
    let value: Value = serde_json::from_slice(body)?;
    match value {
        Value::Null => Ok(None),
        Value::Object(mut map) => {
            if let Some(inner) = map.remove("product") {
                return match inner {
                    Value::Null => Ok(None),
                    inner => Ok(Some(serde_json::from_value(inner)?)),
                };
            }
            Ok(Some(serde_json::from_value(Value::Object(map))?))
        }
        other => Err(CatalogError::Decode(format!(
            "expected product object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Decode a category-list body into canonical `Vec<String>`.
pub fn decode_categories(body: &[u8]) -> Result<Vec<String>, CatalogError> {
    let payload: CategoryListPayload = serde_json::from_slice(body)?;
    Ok(match payload {
        CategoryListPayload::Bare(categories) => categories,
        CategoryListPayload::Wrapped { categories } => categories,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
