//! Order summary calculations.

use serde::{Deserialize, Serialize};

/// Tax rate applied in the order summary.
pub const TAX_RATE: f64 = 0.10;

/// Price breakdown for the cart's order summary panel.
///
/// Computed from the current lines on every read; nothing here is cached.
/// Rounding to currency precision is the presentation layer's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of line subtotals.
    pub subtotal: f64,
    /// Tax on the subtotal.
    pub tax: f64,
    /// Shipping cost. Currently always free.
    pub shipping: f64,
    /// Subtotal + tax + shipping.
    pub total: f64,
}

impl OrderSummary {
    /// Build a summary from a subtotal.
    pub fn from_subtotal(subtotal: f64) -> Self {
        let tax = subtotal * TAX_RATE;
        let shipping = 0.0;
        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}
