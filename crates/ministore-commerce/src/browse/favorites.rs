//! Favorites set.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Session-local set of favorited product ids.
///
/// A pure presentation flag: toggling never affects filtering, sorting, or
/// cart state, and nothing leaves the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Favorites {
    ids: HashSet<ProductId>,
}

impl Favorites {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a product in or out of the set.
    ///
    /// Returns whether the product is favorited afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Whether a product is favorited.
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no products are favorited.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
