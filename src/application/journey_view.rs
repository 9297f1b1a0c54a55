//! JourneyView - read model returned by journey commands and queries.

use serde::Serialize;

use crate::domain::catalog::{Catalog, Chapter, Package};
use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneyState;
use crate::domain::roi::RoiReport;

/// Journey state with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyView {
    pub id: JourneyId,
    pub state: JourneyState,
    pub current_chapter: Option<Chapter>,
    pub selected_package: Option<Package>,
    pub checkout_total: u64,
    pub report: RoiReport,
}

impl JourneyView {
    pub fn new(id: JourneyId, state: JourneyState, catalog: &Catalog) -> Self {
        Self {
            id,
            current_chapter: state.current_chapter(catalog).cloned(),
            selected_package: state.selected_package_details(catalog).cloned(),
            checkout_total: state.checkout_total(catalog),
            report: state.roi_report(),
            state,
        }
    }
}
