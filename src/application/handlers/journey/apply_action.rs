//! ApplyActionHandler - Command handler for journey actions.

use std::sync::Arc;

use crate::application::{JourneyRegistry, JourneyView};
use crate::domain::foundation::JourneyId;
use crate::domain::journey::{JourneyAction, JourneyError};

/// Command to apply one action to a journey.
#[derive(Debug, Clone)]
pub struct ApplyActionCommand {
    pub journey_id: JourneyId,
    pub action: JourneyAction,
}

/// Handler for journey actions.
pub struct ApplyActionHandler {
    registry: Arc<JourneyRegistry>,
}

impl ApplyActionHandler {
    pub fn new(registry: Arc<JourneyRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: ApplyActionCommand) -> Result<JourneyView, JourneyError> {
        let ((), state) = self
            .registry
            .update(cmd.journey_id, |state, catalog| state.apply(cmd.action, catalog))
            .await?;

        Ok(JourneyView::new(cmd.journey_id, state, self.registry.catalog()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryJourneyStorage;
    use crate::domain::catalog::{Catalog, PackageTier};
    use crate::domain::journey::{AppView, JourneyState};
    use crate::domain::roi::{RoiInputField, RoiInputsPatch};

    async fn setup() -> (ApplyActionHandler, JourneyId) {
        let catalog = Arc::new(Catalog::bundled().unwrap());
        let registry = Arc::new(JourneyRegistry::new(catalog, Arc::new(InMemoryJourneyStorage::new())));
        let id = registry.create(JourneyState::new(registry.catalog())).await;
        (ApplyActionHandler::new(registry), id)
    }

    fn cmd(journey_id: JourneyId, action: JourneyAction) -> ApplyActionCommand {
        ApplyActionCommand { journey_id, action }
    }

    #[tokio::test]
    async fn add_to_cart_updates_report() {
        let (handler, id) = setup().await;

        let view = handler
            .handle(cmd(
                id,
                JourneyAction::AddToCart {
                    chapter_id: "chapter-1".to_string(),
                },
            ))
            .await
            .unwrap();

        assert!(view.state.is_in_cart("chapter-1"));
        assert_eq!(view.report.kpis.time_saved, "1,313 hrs");
        assert_eq!(view.report.kpis.annual_roi, "$72,188");
    }

    #[tokio::test]
    async fn selecting_package_sets_checkout_total() {
        let (handler, id) = setup().await;

        let view = handler
            .handle(cmd(id, JourneyAction::SelectPackage { tier: PackageTier::Growth }))
            .await
            .unwrap();

        assert_eq!(view.selected_package.map(|p| p.tier), Some(PackageTier::Growth));
        assert_eq!(view.checkout_total, 29000);
    }

    #[tokio::test]
    async fn rejected_action_keeps_previous_state() {
        let (handler, id) = setup().await;
        handler
            .handle(cmd(id, JourneyAction::SetView(AppView::TitleMap)))
            .await
            .unwrap();

        let err = handler
            .handle(cmd(
                id,
                JourneyAction::UpdateRoiInputs(RoiInputsPatch::single(RoiInputField::AutomationUptakeRate, 150.0)),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, JourneyError::Validation(_)));

        let view = handler.handle(cmd(id, JourneyAction::NextChapter)).await.unwrap();
        assert_eq!(view.state.view(), AppView::TitleMap);
        assert_eq!(view.state.roi_inputs().automation_uptake_rate, 75.0);
    }

    #[tokio::test]
    async fn unknown_journey_is_not_found() {
        let (handler, _) = setup().await;
        let missing = JourneyId::new();

        let err = handler.handle(cmd(missing, JourneyAction::OpenBook)).await.unwrap_err();
        assert_eq!(err, JourneyError::NotFound(missing));
    }
}
