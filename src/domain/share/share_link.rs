//! Share links - journey state encoded as URL query parameters.
//!
//! | Param | Meaning | Written when |
//! |-------|---------|--------------|
//! | `name` | viewer name | set |
//! | `cart` | comma-separated chapter ids | cart non-empty |
//! | `avgCost` | average hourly cost | differs from catalog default |
//! | `hoursSaved` | hours saved per week | differs from catalog default |
//! | `uptake` | automation uptake % | differs from catalog default |
//! | `page` | chapter index | greater than 0 |

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::catalog::Catalog;
use crate::domain::journey::{JourneyAction, JourneyError, JourneyState};
use crate::domain::roi::{RoiInputField, RoiInputs, RoiInputsPatch};

const PARAM_NAME: &str = "name";
const PARAM_CART: &str = "cart";
const PARAM_PAGE: &str = "page";

fn param_for(field: RoiInputField) -> &'static str {
    match field {
        RoiInputField::AvgHourlyCost => "avgCost",
        RoiInputField::HoursSavedPerWeek => "hoursSaved",
        RoiInputField::AutomationUptakeRate => "uptake",
    }
}

/// Decoded share parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShareLink {
    pub name: Option<String>,
    pub cart: Vec<String>,
    pub roi_inputs: RoiInputsPatch,
    pub page: Option<usize>,
}

/// What happened when a link was applied to a journey.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShareApplyOutcome {
    pub added_chapters: Vec<String>,
    pub ignored_chapters: Vec<String>,
    pub rejected_inputs: Vec<RoiInputField>,
    pub page_applied: bool,
}

impl ShareLink {
    /// Captures the shareable parts of a journey. ROI inputs equal to the
    /// catalog defaults are left out.
    pub fn from_state(state: &JourneyState, defaults: &RoiInputs) -> Self {
        let inputs = state.roi_inputs();
        let mut roi_inputs = RoiInputsPatch::default();
        for field in RoiInputField::ALL {
            let value = inputs.get(field);
            if value != defaults.get(field) {
                roi_inputs = roi_inputs.with(field, value);
            }
        }

        Self {
            name: state.viewer_name().map(str::to_string),
            cart: state.cart().chapter_ids().into_iter().map(String::from).collect(),
            roi_inputs,
            page: Some(state.chapter_index()).filter(|page| *page > 0),
        }
    }

    /// Appends the parameters to `base`, replacing any existing query.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            pairs.push((PARAM_NAME, name.to_string()));
        }
        if !self.cart.is_empty() {
            pairs.push((PARAM_CART, self.cart.join(",")));
        }
        for (field, value) in self.roi_inputs.values() {
            pairs.push((param_for(field), value.to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push((PARAM_PAGE, page.to_string()));
        }

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// Reads the parameters from a URL. Unknown parameters, empty ids and
    /// unparsable numbers are ignored.
    pub fn parse(url: &Url) -> Self {
        let mut link = Self::default();

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                PARAM_NAME => {
                    let name = value.trim();
                    if !name.is_empty() {
                        link.name = Some(name.to_string());
                    }
                }
                PARAM_CART => {
                    link.cart = value
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(String::from)
                        .collect();
                }
                PARAM_PAGE => {
                    link.page = value.trim().parse::<usize>().ok();
                }
                other => {
                    let field = RoiInputField::ALL.into_iter().find(|f| param_for(*f) == other);
                    if let Some(field) = field {
                        if let Some(number) = value.trim().parse::<f64>().ok().filter(|n| n.is_finite()) {
                            link.roi_inputs = link.roi_inputs.with(field, number);
                        }
                    }
                }
            }
        }
        link
    }

    /// Parses only a query string (with or without the leading `?`).
    pub fn parse_query(query: &str) -> Self {
        match Url::parse("http://share.invalid/") {
            Ok(mut url) => {
                url.set_query(Some(query.trim_start_matches('?')));
                Self::parse(&url)
            }
            Err(_) => Self::default(),
        }
    }

    /// Applies the link to a journey. Unknown chapters and out-of-range
    /// inputs are skipped; everything valid is applied.
    pub fn apply_to(&self, state: &mut JourneyState, catalog: &Catalog) -> ShareApplyOutcome {
        let mut outcome = ShareApplyOutcome::default();

        if let Some(name) = &self.name {
            if state.apply(JourneyAction::SetViewerName(name.clone()), catalog).is_err() {
                debug!("Ignoring shared viewer name");
            }
        }

        for chapter_id in &self.cart {
            let action = JourneyAction::AddToCart {
                chapter_id: chapter_id.clone(),
            };
            match state.apply(action, catalog) {
                Ok(()) => outcome.added_chapters.push(chapter_id.clone()),
                Err(JourneyError::ChapterNotFound(_)) => outcome.ignored_chapters.push(chapter_id.clone()),
                Err(e) => {
                    debug!(chapter_id = %chapter_id, error = %e, "Ignoring shared chapter");
                    outcome.ignored_chapters.push(chapter_id.clone());
                }
            }
        }

        for (field, value) in self.roi_inputs.values() {
            let action = JourneyAction::UpdateRoiInputs(RoiInputsPatch::single(field, value));
            if state.apply(action, catalog).is_err() {
                outcome.rejected_inputs.push(field);
            }
        }

        if let Some(page) = self.page {
            outcome.page_applied = state.apply(JourneyAction::SetChapterIndex(page), catalog).is_ok();
        }

        outcome
    }
}
