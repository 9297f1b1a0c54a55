//! Actions accepted by the journey state container.

use serde::{Deserialize, Serialize};

use super::{AppView, PageTransition};
use crate::domain::catalog::PackageTier;
use crate::domain::roi::RoiInputsPatch;

/// A single state change requested by the client.
///
/// Wire form: `{"type": "ADD_TO_CART", "payload": {"chapter_id": "chapter-1"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JourneyAction {
    SetView(AppView),
    Navigate {
        view: AppView,
        #[serde(default)]
        transition: PageTransition,
    },
    SetChapterIndex(usize),
    NextChapter,
    PreviousChapter,
    AddToCart { chapter_id: String },
    RemoveFromCart { chapter_id: String },
    SelectPackage { tier: PackageTier },
    UpdateRoiInputs(RoiInputsPatch),
    SetViewerName(String),
    OpenBook,
    SetTransition(PageTransition),
    CompletePayment,
    ResetJourney,
}

impl JourneyAction {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            JourneyAction::SetView(_) => "set_view",
            JourneyAction::Navigate { .. } => "navigate",
            JourneyAction::SetChapterIndex(_) => "set_chapter_index",
            JourneyAction::NextChapter => "next_chapter",
            JourneyAction::PreviousChapter => "previous_chapter",
            JourneyAction::AddToCart { .. } => "add_to_cart",
            JourneyAction::RemoveFromCart { .. } => "remove_from_cart",
            JourneyAction::SelectPackage { .. } => "select_package",
            JourneyAction::UpdateRoiInputs(_) => "update_roi_inputs",
            JourneyAction::SetViewerName(_) => "set_viewer_name",
            JourneyAction::OpenBook => "open_book",
            JourneyAction::SetTransition(_) => "set_transition",
            JourneyAction::CompletePayment => "complete_payment",
            JourneyAction::ResetJourney => "reset_journey",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_to_cart_wire_format() {
        let action: JourneyAction =
            serde_json::from_str(r#"{"type":"ADD_TO_CART","payload":{"chapter_id":"chapter-1"}}"#).unwrap();
        assert_eq!(
            action,
            JourneyAction::AddToCart {
                chapter_id: "chapter-1".to_string()
            }
        );
    }

    #[test]
    fn unit_actions_need_no_payload() {
        let action: JourneyAction = serde_json::from_str(r#"{"type":"NEXT_CHAPTER"}"#).unwrap();
        assert_eq!(action, JourneyAction::NextChapter);
    }

    #[test]
    fn navigate_defaults_to_no_transition() {
        let action: JourneyAction =
            serde_json::from_str(r#"{"type":"NAVIGATE","payload":{"view":"title-map"}}"#).unwrap();
        assert_eq!(
            action,
            JourneyAction::Navigate {
                view: AppView::TitleMap,
                transition: PageTransition::None
            }
        );
    }

    #[test]
    fn roi_patch_wire_format() {
        let action: JourneyAction = serde_json::from_str(
            r#"{"type":"UPDATE_ROI_INPUTS","payload":{"hours_saved_per_week":30}}"#,
        )
        .unwrap();
        match action {
            JourneyAction::UpdateRoiInputs(patch) => {
                assert_eq!(patch.hours_saved_per_week, Some(30.0));
                assert_eq!(patch.avg_hourly_cost, None);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn select_package_wire_format() {
        let action: JourneyAction =
            serde_json::from_str(r#"{"type":"SELECT_PACKAGE","payload":{"tier":"Growth"}}"#).unwrap();
        assert_eq!(action.name(), "select_package");
    }
}
