//! Catalog module - static offering configuration.
//!
//! # Components
//!
//! - `Chapter` - a selectable automation with pricing and savings
//! - `Package` - a priced bundle of chapters
//! - `RoiSettings` - slider ranges, defaults and methodology notes
//! - `Suggestion` - follow-up ideas per chapter
//! - `Catalog` - the validated whole, passed explicitly to the engine

#[allow(clippy::module_inception)]
mod catalog;
mod chapter;
mod package;
mod roi_settings;
mod suggestion;

pub use catalog::{Brand, Catalog, CatalogError};
pub use chapter::{Chapter, ChapterPricing, ChapterSavings};
pub use package::{Package, PackageTier};
pub use roi_settings::{RoiSettings, RoiSlider};
pub use suggestion::{default_suggestions, Impact, Suggestion};
