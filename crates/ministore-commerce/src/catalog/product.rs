//! Product record type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product record from the catalog service.
///
/// Immutable once fetched; a newer fetch supersedes the whole set rather
/// than mutating individual records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Brand name, when the catalog provides one.
    #[serde(default)]
    pub brand: Option<String>,
    /// Model designation, when the catalog provides one.
    #[serde(default)]
    pub model: Option<String>,
    /// Color, when the catalog provides one.
    #[serde(default)]
    pub color: Option<String>,
    /// Discount percentage (0-100), when the product is on sale.
    #[serde(default)]
    pub discount: Option<f64>,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Discount as a fraction in 0.0..=1.0. Absent discount is 0.
    pub fn discount_fraction(&self) -> f64 {
        self.discount.unwrap_or(0.0) / 100.0
    }

    /// Whether the product carries a positive discount.
    pub fn is_on_sale(&self) -> bool {
        self.discount.unwrap_or(0.0) > 0.0
    }

    /// Compare-at price reconstructed from the discount percentage.
    ///
    /// The catalog only ships the discounted price; the pre-sale price is
    /// `price / (1 - discount/100)`. `None` without a usable discount.
    pub fn original_price(&self) -> Option<f64> {
        let discount = self.discount.unwrap_or(0.0);
        if discount > 0.0 && discount < 100.0 {
            Some(self.price / (1.0 - discount / 100.0))
        } else {
            None
        }
    }
}
