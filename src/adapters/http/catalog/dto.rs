//! DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Brand, Catalog, Chapter, Package, RoiSettings, Suggestion};

/// Full catalog as the client renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub brand: Brand,
    pub chapters: Vec<Chapter>,
    pub packages: Vec<Package>,
    pub roi: RoiSettings,
}

impl From<&Catalog> for CatalogResponse {
    fn from(catalog: &Catalog) -> Self {
        Self {
            brand: catalog.brand.clone(),
            chapters: catalog.chapters.clone(),
            packages: catalog.packages.clone(),
            roi: catalog.roi.clone(),
        }
    }
}

/// Suggestions for one chapter, or the catalog-wide value suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
    pub suggestions: Vec<Suggestion>,
}
