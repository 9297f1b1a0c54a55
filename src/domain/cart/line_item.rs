//! Cart line item - a snapshot of a chapter at selection time.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Chapter, ChapterSavings};

/// A chapter copied into the cart.
///
/// Holds values, not a reference into the catalog: later catalog edits do
/// not change items that were already added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub chapter_id: String,
    pub chapter_title: String,
    pub cost_usd: u64,
    pub impl_hours: u64,
    pub savings: ChapterSavings,
}

impl CartLineItem {
    /// Creates a line item from explicit values.
    pub fn new(
        chapter_id: impl Into<String>,
        chapter_title: impl Into<String>,
        cost_usd: u64,
        impl_hours: u64,
        savings: ChapterSavings,
    ) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            chapter_title: chapter_title.into(),
            cost_usd,
            impl_hours,
            savings,
        }
    }

    /// Copies the fields the engine needs out of a catalog chapter.
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            chapter_id: chapter.id.clone(),
            chapter_title: chapter.title.clone(),
            cost_usd: chapter.pricing.cost_usd,
            impl_hours: chapter.pricing.impl_hours,
            savings: chapter.savings,
        }
    }
}
