//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::catalog::{Catalog, CatalogError};

/// Where the offering catalog comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the bundled catalog is used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Loads the configured catalog
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match &self.path {
            Some(path) => Catalog::load(path),
            None => Catalog::bundled(),
        }
    }
}
