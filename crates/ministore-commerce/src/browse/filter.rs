//! Product filtering and sorting.
//!
//! The derived view list is a pure function of the full product set and the
//! current criteria, recomputed whenever either changes.

use crate::browse::{Criteria, SortMode};
use crate::catalog::{category, Product};

/// Apply `criteria` to `products`, producing the derived view list.
///
/// Filtering keeps fetch order; sorting is stable, so products with equal
/// keys keep their relative order from the filter stage.
pub fn apply(products: &[Product], criteria: &Criteria) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| matches_category(p, criteria.category.as_deref()))
        .filter(|p| matches_query(p, criteria.normalized_query()))
        .cloned()
        .collect();

    sort(&mut result, criteria.sort);
    result
}

/// Whether a product belongs to the selected category. `None` selects all.
pub fn matches_category(product: &Product, selected: Option<&str>) -> bool {
    match selected {
        Some(selected) => category::matches(&product.category, selected),
        None => true,
    }
}

/// Whether a product matches the search query. `None` matches all.
///
/// A match is a case-insensitive substring hit on title, description,
/// category, or brand; any one field matching suffices.
pub fn matches_query(product: &Product, query: Option<&str>) -> bool {
    let Some(query) = query else {
        return true;
    };

    let needle = query.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
        || product
            .brand
            .as_deref()
            .map(|brand| brand.to_lowercase().contains(&needle))
            .unwrap_or(false)
}

/// Stable in-place sort per the sort mode.
pub fn sort(products: &mut [Product], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::Name => {
            products.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortMode::PriceAsc => {
            products.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortMode::PriceDesc => {
            products.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
        SortMode::DiscountDesc => {
            products.sort_by(|a, b| {
                let a_discount = a.discount.unwrap_or(0.0);
                let b_discount = b.discount.unwrap_or(0.0);
                b_discount.total_cmp(&a_discount)
            });
        }
    }
}

/// Count the products a category filter would keep.
///
/// `None` counts the whole set. Counts always run over the full product set,
/// never the currently derived list.
pub fn count_in_category(products: &[Product], selected: Option<&str>) -> usize {
    match selected {
        Some(selected) => products
            .iter()
            .filter(|p| category::matches(&p.category, selected))
            .count(),
        None => products.len(),
    }
}
