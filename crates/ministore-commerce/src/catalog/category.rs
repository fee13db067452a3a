//! Category helpers.
//!
//! Categories are plain names owned by the catalog service. These helpers
//! cover the matching, derivation, and display rules the storefront needs.

use crate::catalog::Product;

/// Case-insensitive category comparison.
pub fn matches(candidate: &str, selected: &str) -> bool {
    candidate.to_lowercase() == selected.to_lowercase()
}

/// Distinct category names present in `products`, first-seen order.
///
/// Fallback source when the remote category list fails or comes back empty.
pub fn derive_from_products(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if product.category.is_empty() {
            continue;
        }
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Present a category name with its first letter uppercased.
pub fn display_name(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
