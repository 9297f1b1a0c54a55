//! Package tiers - bundles of chapters sold at a fixed price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Package tier offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackageTier {
    /// Capture, Bridge and Close.
    Core,
    /// Core plus dashboard and customer portal.
    Growth,
    /// Every chapter.
    Scale,
}

impl PackageTier {
    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageTier::Core => "Core",
            PackageTier::Growth => "Growth",
            PackageTier::Scale => "Scale",
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PackageTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(PackageTier::Core),
            "growth" => Ok(PackageTier::Growth),
            "scale" => Ok(PackageTier::Scale),
            other => Err(ValidationError::invalid_format(
                "tier",
                format!("unknown package tier '{}'", other),
            )),
        }
    }
}

/// A priced bundle of chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub tier: PackageTier,
    pub included_chapter_ids: Vec<String>,
    pub price_usd: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Package {
    /// Returns true if the package bundles the given chapter.
    pub fn includes(&self, chapter_id: &str) -> bool {
        self.included_chapter_ids.iter().any(|id| id == chapter_id)
    }
}
