//! Chapter - a selectable automation offering in the catalog.

use serde::{Deserialize, Serialize};

use super::Suggestion;
use crate::domain::foundation::ValidationError;

/// One-time price of implementing a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterPricing {
    pub cost_usd: u64,
    pub impl_hours: u64,
}

/// Recurring savings a chapter is expected to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChapterSavings {
    pub hours_per_week: f64,
    pub dollars_per_year: f64,
}

impl ChapterSavings {
    /// Creates a savings profile.
    pub fn new(hours_per_week: f64, dollars_per_year: f64) -> Self {
        Self {
            hours_per_week,
            dollars_per_year,
        }
    }
}

/// A catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary_one_liner: String,
    #[serde(default)]
    pub tools: Vec<String>,
    pub pricing: ChapterPricing,
    pub savings: ChapterSavings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Chapter {
    /// Creates a chapter with pricing and savings and no display metadata.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        pricing: ChapterPricing,
        savings: ChapterSavings,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary_one_liner: String::new(),
            tools: Vec::new(),
            pricing,
            savings,
            suggestions: Vec::new(),
        }
    }

    /// Checks the invariants a catalog entry must hold.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty_field("chapter.id"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.title", self.id)));
        }
        for (field, value) in [
            ("hours_per_week", self.savings.hours_per_week),
            ("dollars_per_year", self.savings.dollars_per_year),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::invalid_format(
                    format!("{}.savings.{}", self.id, field),
                    "must be a finite, non-negative number",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter() -> Chapter {
        Chapter::new(
            "chapter-1",
            "Chapter I: The Capture",
            ChapterPricing {
                cost_usd: 8500,
                impl_hours: 24,
            },
            ChapterSavings::new(12.0, 62400.0),
        )
    }

    #[test]
    fn valid_chapter_passes_validation() {
        assert!(chapter().validate().is_ok());
    }

    #[test]
    fn blank_id_is_rejected() {
        let mut c = chapter();
        c.id = "  ".to_string();
        assert_eq!(
            c.validate(),
            Err(ValidationError::empty_field("chapter.id"))
        );
    }

    #[test]
    fn negative_savings_are_rejected() {
        let mut c = chapter();
        c.savings.hours_per_week = -1.0;
        let err = c.validate().unwrap_err();
        assert_eq!(err.field(), "chapter-1.savings.hours_per_week");
    }

    #[test]
    fn non_finite_savings_are_rejected() {
        let mut c = chapter();
        c.savings.dollars_per_year = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn chapter_deserializes_without_optional_metadata() {
        let yaml = r#"
id: chapter-9
title: Chapter IX
pricing:
  cost_usd: 1000
  impl_hours: 4
savings:
  hours_per_week: 2
  dollars_per_year: 5200
"#;
        let c: Chapter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(c.id, "chapter-9");
        assert!(c.tools.is_empty());
        assert!(c.suggestions.is_empty());
        assert_eq!(c.pricing.cost_usd, 1000);
        assert_eq!(c.savings.hours_per_week, 2.0);
    }
}
