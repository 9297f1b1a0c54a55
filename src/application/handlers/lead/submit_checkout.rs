//! SubmitCheckoutHandler - Command handler for completing checkout.
//!
//! Marks the journey's payment complete, then notifies the CRM. Payments
//! are not processed here; checkout records intent only.

use std::sync::Arc;

use tracing::info;

use super::DeliveryOutcome;
use crate::application::{JourneyRegistry, JourneyView};
use crate::domain::cart::CartLineItem;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::JourneyId;
use crate::domain::journey::{JourneyAction, JourneyError, JourneyState};
use crate::domain::lead::{CheckoutSubmission, LeadData};
use crate::ports::LeadSink;

/// Command to complete checkout.
#[derive(Debug, Clone)]
pub struct SubmitCheckoutCommand {
    pub journey_id: JourneyId,
    pub lead: LeadData,
    pub payment_method: Option<String>,
}

/// Result of a checkout.
#[derive(Debug, Clone)]
pub struct SubmitCheckoutResult {
    pub journey: JourneyView,
    pub total_cost: u64,
    pub delivery: DeliveryOutcome,
}

/// Handler for checkouts.
pub struct SubmitCheckoutHandler {
    registry: Arc<JourneyRegistry>,
    sink: Arc<dyn LeadSink>,
}

impl SubmitCheckoutHandler {
    pub fn new(registry: Arc<JourneyRegistry>, sink: Arc<dyn LeadSink>) -> Self {
        Self { registry, sink }
    }

    /// # Errors
    ///
    /// - `Validation` if the contact details are incomplete
    /// - `NothingToCheckout` if the cart is empty and no package is selected
    /// - `NotFound` if the journey does not exist
    pub async fn handle(&self, cmd: SubmitCheckoutCommand) -> Result<SubmitCheckoutResult, JourneyError> {
        let lead = cmd.lead.normalized();
        lead.validate()?;

        let ((), state) = self
            .registry
            .update(cmd.journey_id, |state, catalog| {
                state.apply(JourneyAction::CompletePayment, catalog)
            })
            .await?;

        let catalog = self.registry.catalog();
        let total_cost = state.checkout_total(catalog);
        let items = order_items(&state, catalog);
        let submission = CheckoutSubmission::new(lead, &items, total_cost, cmd.payment_method);

        info!(journey_id = %cmd.journey_id, total_cost, items = items.len(), "Checkout completed");
        let result = self.sink.submit_checkout(&submission).await;

        Ok(SubmitCheckoutResult {
            journey: JourneyView::new(cmd.journey_id, state, catalog),
            total_cost,
            delivery: DeliveryOutcome::from_result(cmd.journey_id, "checkout", result),
        })
    }
}

/// Items on the order: the selected package's chapters, otherwise the cart.
fn order_items(state: &JourneyState, catalog: &Catalog) -> Vec<CartLineItem> {
    match state.selected_package() {
        Some(tier) => catalog
            .package_chapters(tier)
            .into_iter()
            .map(CartLineItem::from_chapter)
            .collect(),
        None => state.cart().items().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryJourneyStorage;
    use crate::domain::catalog::PackageTier;
    use crate::domain::lead::LeadSubmission;
    use crate::ports::LeadSinkError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        checkouts: Mutex<Vec<CheckoutSubmission>>,
        reject: bool,
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        async fn submit_lead(&self, _submission: &LeadSubmission) -> Result<(), LeadSinkError> {
            Ok(())
        }

        async fn submit_checkout(&self, submission: &CheckoutSubmission) -> Result<(), LeadSinkError> {
            if self.reject {
                return Err(LeadSinkError::Rejected { status: 503 });
            }
            self.checkouts.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    async fn setup(sink: Arc<RecordingSink>, actions: Vec<JourneyAction>) -> (SubmitCheckoutHandler, JourneyId) {
        let catalog = Arc::new(Catalog::bundled().unwrap());
        let registry = Arc::new(JourneyRegistry::new(catalog, Arc::new(InMemoryJourneyStorage::new())));
        let id = registry.create(JourneyState::new(registry.catalog())).await;
        for action in actions {
            registry
                .update(id, |state, catalog| state.apply(action, catalog))
                .await
                .unwrap();
        }
        (SubmitCheckoutHandler::new(registry, sink), id)
    }

    fn add(chapter_id: &str) -> JourneyAction {
        JourneyAction::AddToCart {
            chapter_id: chapter_id.to_string(),
        }
    }

    fn cmd(journey_id: JourneyId) -> SubmitCheckoutCommand {
        SubmitCheckoutCommand {
            journey_id,
            lead: LeadData::new("Ada", "ada@example.com"),
            payment_method: Some("invoice".to_string()),
        }
    }

    #[tokio::test]
    async fn cart_checkout_totals_cart_cost() {
        let sink = Arc::new(RecordingSink::default());
        let (handler, id) = setup(sink.clone(), vec![add("chapter-1"), add("chapter-2")]).await;

        let result = handler.handle(cmd(id)).await.unwrap();

        assert_eq!(result.total_cost, 16000);
        assert!(result.journey.state.is_payment_complete());
        assert!(result.delivery.delivered);

        let checkouts = sink.checkouts.lock().unwrap();
        assert_eq!(checkouts[0].order.total_cost, 16000);
        assert_eq!(checkouts[0].order.items.len(), 2);
        assert_eq!(checkouts[0].order.payment_method.as_deref(), Some("invoice"));
    }

    #[tokio::test]
    async fn package_checkout_uses_package_price_and_chapters() {
        let sink = Arc::new(RecordingSink::default());
        let (handler, id) = setup(sink.clone(), vec![JourneyAction::SelectPackage { tier: PackageTier::Growth }]).await;

        let result = handler.handle(cmd(id)).await.unwrap();

        assert_eq!(result.total_cost, 29000);
        let checkouts = sink.checkouts.lock().unwrap();
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(
            checkouts[0].order.items.len(),
            catalog.package_chapters(PackageTier::Growth).len()
        );
    }

    #[tokio::test]
    async fn empty_checkout_is_rejected() {
        let sink = Arc::new(RecordingSink::default());
        let (handler, id) = setup(sink.clone(), vec![]).await;

        let err = handler.handle(cmd(id)).await.unwrap_err();

        assert_eq!(err, JourneyError::NothingToCheckout);
        assert!(sink.checkouts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_delivery_still_completes_payment() {
        let sink = Arc::new(RecordingSink {
            reject: true,
            ..Default::default()
        });
        let (handler, id) = setup(sink, vec![add("chapter-3")]).await;

        let result = handler.handle(cmd(id)).await.unwrap();

        assert!(result.journey.state.is_payment_complete());
        assert!(!result.delivery.delivered);
    }
}
