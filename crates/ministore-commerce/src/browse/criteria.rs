//! Filter and sort criteria for the product listing.

use serde::{Deserialize, Serialize};

/// Sort modes for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Keep catalog fetch order.
    #[default]
    Default,
    /// Title A-Z.
    Name,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Largest discount first.
    DiscountDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Name => "name",
            SortMode::PriceAsc => "price-low",
            SortMode::PriceDesc => "price-high",
            SortMode::DiscountDesc => "discount",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(SortMode::Default),
            "name" => Some(SortMode::Name),
            "price-low" => Some(SortMode::PriceAsc),
            "price-high" => Some(SortMode::PriceDesc),
            "discount" => Some(SortMode::DiscountDesc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::Name => "Name",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::DiscountDesc => "Discount",
        }
    }
}

/// Filter and sort criteria for the product listing.
///
/// Ephemeral UI state: never persisted, and never touches product or cart
/// data. The derived view list is recomputed whenever anything here changes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Criteria {
    /// Selected category; `None` means all categories.
    pub category: Option<String>,
    /// Free-text search query.
    pub query: String,
    /// Sort mode.
    pub sort: SortMode,
}

impl Criteria {
    /// Criteria that select everything in fetch order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Reset to the defaults: all categories, empty query, default sort.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trimmed query, `None` when blank.
    pub fn normalized_query(&self) -> Option<&str> {
        let query = self.query.trim();
        if query.is_empty() {
            None
        } else {
            Some(query)
        }
    }
}
