//! Persisted form of a journey.

use serde::{Deserialize, Serialize};

use crate::domain::cart::{AccumulatedSavings, CartLineItem};
use crate::domain::catalog::PackageTier;
use crate::domain::foundation::Timestamp;
use crate::domain::roi::RoiInputs;

/// What survives between visits. Transient UI state (view, transition,
/// book-open flag) is not stored.
///
/// `accumulated_savings` and `selected_chapter_ids` are informational;
/// hydration re-derives both from `cart_items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneySnapshot {
    #[serde(default)]
    pub selected_chapter_ids: Vec<String>,
    #[serde(default)]
    pub cart_items: Vec<CartLineItem>,
    #[serde(default)]
    pub accumulated_savings: AccumulatedSavings,
    pub roi_inputs: RoiInputs,
    #[serde(default)]
    pub selected_package: Option<PackageTier>,
    #[serde(default)]
    pub viewer_name: Option<String>,
    #[serde(default)]
    pub chapter_index: usize,
    #[serde(default)]
    pub payment_complete: bool,
    pub saved_at: Timestamp,
}
