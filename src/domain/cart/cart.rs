//! Cart - ordered, de-duplicated selection of chapters.

use serde::{Deserialize, Serialize};

use super::{AccumulatedSavings, CartLineItem};
use crate::domain::catalog::{Catalog, Chapter};

/// Selected chapters in the order they were added.
///
/// Invariant: no two items share a `chapter_id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored items, keeping only the first occurrence
    /// of each chapter and dropping chapters the catalog no longer offers.
    pub fn restore(items: Vec<CartLineItem>, catalog: &Catalog) -> Self {
        let mut cart = Self::new();
        for item in items {
            if catalog.chapter(&item.chapter_id).is_some() {
                cart.add_line_item(item);
            }
        }
        cart
    }

    /// Adds a chapter. Returns false (and changes nothing) if it is already
    /// in the cart.
    pub fn add(&mut self, chapter: &Chapter) -> bool {
        self.add_line_item(CartLineItem::from_chapter(chapter))
    }

    /// Adds a prepared line item, ignoring duplicates.
    pub fn add_line_item(&mut self, item: CartLineItem) -> bool {
        if self.contains(&item.chapter_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes a chapter. Returns false if it was not present.
    pub fn remove(&mut self, chapter_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.chapter_id != chapter_id);
        self.items.len() != before
    }

    pub fn contains(&self, chapter_id: &str) -> bool {
        self.items.iter().any(|item| item.chapter_id == chapter_id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Selected chapter ids in cart order.
    pub fn chapter_ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.chapter_id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals over the current contents.
    pub fn accumulated_savings(&self) -> AccumulatedSavings {
        AccumulatedSavings::accumulate(&self.items)
    }
}
