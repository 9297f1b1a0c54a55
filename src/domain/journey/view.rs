//! Views and page transitions of the journey.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Top-level screen the visitor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppView {
    #[default]
    LandingCover,
    TitleMap,
    Chapter,
    ExecutiveSummary,
    Checkout,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::LandingCover => "landing-cover",
            AppView::TitleMap => "title-map",
            AppView::Chapter => "chapter",
            AppView::ExecutiveSummary => "executive-summary",
            AppView::Checkout => "checkout",
        }
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing-cover" => Ok(AppView::LandingCover),
            "title-map" => Ok(AppView::TitleMap),
            "chapter" => Ok(AppView::Chapter),
            "executive-summary" => Ok(AppView::ExecutiveSummary),
            "checkout" => Ok(AppView::Checkout),
            other => Err(ValidationError::invalid_format(
                "view",
                format!("unknown view '{}'", other),
            )),
        }
    }
}

/// Animation the client should play before showing the next view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageTransition {
    #[default]
    None,
    OpenBook,
    PageTurnForward,
    PageTurnBack,
    MapBurn,
    TreasureErupt,
    HeroReturn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_use_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&AppView::ExecutiveSummary).unwrap();
        assert_eq!(json, "\"executive-summary\"");
    }

    #[test]
    fn view_parses_from_its_display_form() {
        for view in [
            AppView::LandingCover,
            AppView::TitleMap,
            AppView::Chapter,
            AppView::ExecutiveSummary,
            AppView::Checkout,
        ] {
            assert_eq!(view.to_string().parse::<AppView>().unwrap(), view);
        }
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert!("back-cover".parse::<AppView>().is_err());
    }

    #[test]
    fn transitions_use_kebab_case_on_the_wire() {
        let t: PageTransition = serde_json::from_str("\"page-turn-forward\"").unwrap();
        assert_eq!(t, PageTransition::PageTurnForward);
        assert_eq!(PageTransition::default(), PageTransition::None);
    }
}
