//! Cart and line item types.

use crate::cart::OrderSummary;
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// One cart lives for the session and holds at most one line per product id,
/// in insertion order. Totals are derived from the lines on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in the cart, insertion order.
    items: Vec<CartLine>,
    /// Unix timestamp of creation.
    created_at: i64,
    /// Unix timestamp of last update.
    updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the product gains quantity 1, saturating at
    /// `i64::MAX`; otherwise a new line is appended with quantity 1. Adding
    /// is never rejected.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|l| l.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(CartLine::from_product(product));
        }
        self.updated_at = current_timestamp();
    }

    /// Remove the line for a product.
    ///
    /// An absent id is a no-op, not an error.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|l| l.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Set the quantity for a product's line.
    ///
    /// A quantity of zero or less removes the line. Returns whether a line
    /// was changed or removed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            self.updated_at = current_timestamp();
            true
        } else {
            false
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Total item count (sum of line quantities), saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |count, line| count.saturating_add(line.quantity))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total price (sum of price x quantity over all lines).
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|l| l.subtotal()).sum()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| l.product_id == product_id)
    }

    /// Lines in insertion order, for display.
    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    /// Order summary with the checkout panel's price breakdown.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.total_price())
    }

    /// Unix timestamp of creation.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Unix timestamp of the last mutation.
    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line item in the cart.
///
/// Display fields are denormalized from the product at add-time so the cart
/// renders without another catalog fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price captured at add-time.
    pub price: f64,
    /// Image URL.
    pub image: String,
    /// Brand name, when known.
    pub brand: Option<String>,
    /// Category name.
    pub category: String,
    /// Model designation, when known.
    pub model: Option<String>,
    /// Color, when known.
    pub color: Option<String>,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    /// Capture a new line from a product, with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            model: product.model.clone(),
            color: product.color.clone(),
            quantity: 1,
        }
    }

    /// Line subtotal (price x quantity), computed on read.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Parse free-text quantity input.
///
/// Returns `None` for text that is not an integer. Callers should treat
/// `None` as "leave the line unchanged": a stray keystroke must not delete
/// the line, while an explicit zero or negative value still removes it via
/// [`Cart::set_quantity`].
pub fn parse_quantity(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            price,
            category: "misc".to_string(),
            brand: Some("Acme".to_string()),
            model: None,
            color: None,
            discount: None,
            image: format!("https://cdn.example.com/{}.jpg", id),
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let product = make_product(1, "Mug", 10.0);

        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price(), 20.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&make_product(3, "Lamp", 30.0));
        cart.add(&make_product(1, "Mug", 4.5));
        cart.add(&make_product(3, "Lamp", 30.0));
        cart.add(&make_product(2, "Desk", 120.0));

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.product_id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));

        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));

        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));

        assert!(cart.set_quantity(ProductId::new(1), 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));

        assert!(cart.set_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));

        assert!(cart.set_quantity(ProductId::new(1), -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(ProductId::new(42), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));
        cart.add(&make_product(2, "Desk", 120.0));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_totals_match_lines() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));
        cart.add(&make_product(2, "Desk", 120.0));
        cart.set_quantity(ProductId::new(1), 4);

        assert_eq!(cart.item_count(), 5);
        assert!((cart.total_price() - (4.5 * 4.0 + 120.0)).abs() < 1e-9);
    }

    #[test]
    fn test_add_at_max_quantity_saturates() {
        let mut cart = Cart::new();
        let product = make_product(1, "Mug", 4.5);
        cart.add(&product);
        cart.set_quantity(ProductId::new(1), i64::MAX);

        cart.add(&product);

        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_item_count_saturates_across_lines() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 4.5));
        cart.add(&make_product(2, "Desk", 120.0));
        cart.set_quantity(ProductId::new(1), i64::MAX);
        cart.set_quantity(ProductId::new(2), i64::MAX);

        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_denormalized_display_fields() {
        let mut cart = Cart::new();
        let mut product = make_product(1, "Mug", 4.5);
        product.color = Some("blue".to_string());
        cart.add(&product);

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.title, "Mug");
        assert_eq!(line.brand.as_deref(), Some("Acme"));
        assert_eq!(line.category, "misc");
        assert_eq!(line.color.as_deref(), Some("blue"));
        assert_eq!(line.image, "https://cdn.example.com/1.jpg");
    }

    #[test]
    fn test_line_subtotal() {
        let mut cart = Cart::new();
        cart.add(&make_product(1, "Mug", 2.5));
        cart.set_quantity(ProductId::new(1), 3);

        assert_eq!(cart.get(ProductId::new(1)).unwrap().subtotal(), 7.5);
    }

    #[test]
    fn test_timestamps_track_mutations() {
        let mut cart = Cart::new();
        assert_eq!(cart.created_at(), cart.updated_at());

        cart.add(&make_product(1, "Mug", 4.5));

        assert!(cart.updated_at() >= cart.created_at());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("-2"), Some(-2));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("1.5"), None);
    }
}
