//! Catalog - the immutable set of chapters, packages and ROI settings.
//!
//! A catalog is constructed explicitly (from YAML or the bundled default)
//! and handed to every entry point that needs it. Nothing reads it from
//! global state, so several catalogs can be served side by side.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::{default_suggestions, Chapter, Package, PackageTier, RoiSettings, Suggestion};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::roi::RoiInputs;

const BUNDLED_CATALOG: &str = include_str!("../../../catalog/automation_journey.yaml");

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidCatalog
    }
}

/// Branding shown on the cover and in exported documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Brand {
    pub company_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// The full offering catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub brand: Brand,
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub roi: RoiSettings,
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Catalog {
    /// Builds and validates a catalog from its parts.
    pub fn new(
        brand: Brand,
        chapters: Vec<Chapter>,
        roi: RoiSettings,
        packages: Vec<Package>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            brand,
            chapters,
            roi,
            packages,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a YAML catalog.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a YAML catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    /// The catalog shipped with the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_CATALOG)
    }

    /// Looks up a chapter by id.
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Position of a chapter in reading order.
    pub fn chapter_index(&self, id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == id)
    }

    /// Chapter ids in reading order.
    pub fn chapter_ids(&self) -> Vec<&str> {
        self.chapters.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Looks up a package by tier.
    pub fn package(&self, tier: PackageTier) -> Option<&Package> {
        self.packages.iter().find(|p| p.tier == tier)
    }

    /// Chapters bundled in a package, in the package's order.
    ///
    /// Returns an empty list for a tier the catalog does not offer.
    pub fn package_chapters(&self, tier: PackageTier) -> Vec<&Chapter> {
        self.package(tier)
            .map(|p| {
                p.included_chapter_ids
                    .iter()
                    .filter_map(|id| self.chapter(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Initial ROI inputs for a new journey.
    pub fn default_inputs(&self) -> RoiInputs {
        self.roi.default_inputs()
    }

    /// Suggestions for a chapter, or the generic set when it defines none.
    ///
    /// Returns `None` for an unknown chapter.
    pub fn suggestions_for(&self, chapter_id: &str) -> Option<Vec<Suggestion>> {
        let chapter = self.chapter(chapter_id)?;
        if chapter.suggestions.is_empty() {
            Some(default_suggestions())
        } else {
            Some(chapter.suggestions.clone())
        }
    }

    /// Value/cost optimization suggestions for the ROI summary.
    pub fn value_suggestions(&self) -> &[Suggestion] {
        &self.roi.value_suggestions
    }

    /// Checks catalog-wide invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chapters.is_empty() {
            return Err(ValidationError::empty_field("chapters"));
        }

        let mut seen = HashSet::new();
        for chapter in &self.chapters {
            chapter.validate()?;
            if !seen.insert(chapter.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "chapters",
                    format!("duplicate chapter id '{}'", chapter.id),
                ));
            }
        }

        let mut tiers = HashSet::new();
        for package in &self.packages {
            if !tiers.insert(package.tier) {
                return Err(ValidationError::invalid_format(
                    "packages",
                    format!("duplicate package tier '{}'", package.tier),
                ));
            }
            if let Some(unknown) = package
                .included_chapter_ids
                .iter()
                .find(|id| !seen.contains(id.as_str()))
            {
                return Err(ValidationError::invalid_format(
                    "packages",
                    format!("{} package references unknown chapter '{}'", package.tier, unknown),
                ));
            }
        }

        self.roi.validate()
    }
}
