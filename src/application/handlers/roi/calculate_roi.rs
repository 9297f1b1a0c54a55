//! CalculateRoiHandler - Stateless ROI calculation.
//!
//! Builds a throwaway cart from chapter ids and runs the engine without
//! touching any journey.

use std::sync::Arc;

use crate::domain::cart::Cart;
use crate::domain::catalog::Catalog;
use crate::domain::journey::JourneyError;
use crate::domain::roi::{RoiInputsPatch, RoiReport};

/// Query for an ad-hoc ROI report. Inputs left out use the catalog defaults.
#[derive(Debug, Clone, Default)]
pub struct CalculateRoiQuery {
    pub inputs: RoiInputsPatch,
    pub chapter_ids: Vec<String>,
}

pub struct CalculateRoiHandler {
    catalog: Arc<Catalog>,
}

impl CalculateRoiHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// # Errors
    ///
    /// `ChapterNotFound` for the first id the catalog does not offer.
    pub async fn handle(&self, query: CalculateRoiQuery) -> Result<RoiReport, JourneyError> {
        let mut cart = Cart::new();
        for id in &query.chapter_ids {
            let chapter = self
                .catalog
                .chapter(id)
                .ok_or_else(|| JourneyError::chapter_not_found(id.as_str()))?;
            cart.add(chapter);
        }

        let inputs = self.catalog.default_inputs().merged(&query.inputs);
        Ok(RoiReport::build(inputs, cart.accumulated_savings()))
    }
}
