//! DTOs for ROI endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::roi::RoiInputsPatch;

/// Ad-hoc calculation request. Missing inputs use the catalog defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateRoiRequest {
    #[serde(default)]
    pub inputs: RoiInputsPatch,
    #[serde(default)]
    pub chapter_ids: Vec<String>,
}
