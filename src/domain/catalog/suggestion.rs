//! Improvement suggestions shown alongside chapters and the ROI summary.

use serde::{Deserialize, Serialize};

/// Expected impact of acting on a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Returns the display label for this impact level.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        }
    }
}

/// A follow-up idea for extending an automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

impl Suggestion {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        impact: Impact,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            impact,
        }
    }
}

/// Generic suggestions for chapters that do not define their own.
pub fn default_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            "sug-default-1",
            "Process Optimization",
            "Review and optimize the current automation workflow for better performance.",
            Impact::Medium,
        ),
        Suggestion::new(
            "sug-default-2",
            "Integration Expansion",
            "Connect additional tools and services to enhance automation capabilities.",
            Impact::Medium,
        ),
        Suggestion::new(
            "sug-default-3",
            "Analytics Enhancement",
            "Add detailed metrics and reporting to track automation ROI.",
            Impact::Low,
        ),
    ]
}
