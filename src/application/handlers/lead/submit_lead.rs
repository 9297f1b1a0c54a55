//! SubmitLeadHandler - Command handler for the lead capture form.

use std::sync::Arc;

use reqwest::Url;
use tracing::info;

use super::DeliveryOutcome;
use crate::application::JourneyRegistry;
use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneyError;
use crate::domain::lead::{LeadData, LeadSubmission};
use crate::domain::share::ShareLink;
use crate::ports::LeadSink;

/// Command to submit a lead captured during a journey.
#[derive(Debug, Clone)]
pub struct SubmitLeadCommand {
    pub journey_id: JourneyId,
    pub lead: LeadData,
}

/// Handler for lead submissions.
pub struct SubmitLeadHandler {
    registry: Arc<JourneyRegistry>,
    sink: Arc<dyn LeadSink>,
    base_url: Url,
}

impl SubmitLeadHandler {
    pub fn new(registry: Arc<JourneyRegistry>, sink: Arc<dyn LeadSink>, base_url: Url) -> Self {
        Self {
            registry,
            sink,
            base_url,
        }
    }

    /// Validates the lead and hands it to the CRM with the journey's context.
    ///
    /// # Errors
    ///
    /// - `Validation` if the contact details are incomplete
    /// - `NotFound` if the journey does not exist
    pub async fn handle(&self, cmd: SubmitLeadCommand) -> Result<DeliveryOutcome, JourneyError> {
        let lead = cmd.lead.normalized();
        lead.validate()?;

        let state = self.registry.get(cmd.journey_id).await?;
        let catalog = self.registry.catalog();
        let page_url = ShareLink::from_state(&state, &catalog.default_inputs()).to_url(&self.base_url);
        let calculation = state.roi_calculation();

        let submission = LeadSubmission::new(
            lead,
            page_url.as_str(),
            state.cart().items(),
            *state.roi_inputs(),
            Some(calculation.estimated_annual_roi),
        );

        info!(
            journey_id = %cmd.journey_id,
            cart_items = submission.context.cart_items.len(),
            "Submitting lead"
        );
        let result = self.sink.submit_lead(&submission).await;
        Ok(DeliveryOutcome::from_result(cmd.journey_id, "lead", result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryJourneyStorage;
    use crate::domain::catalog::Catalog;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::journey::{JourneyAction, JourneyState};
    use crate::domain::lead::CheckoutSubmission;
    use crate::ports::LeadSinkError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        leads: Mutex<Vec<LeadSubmission>>,
        fail: bool,
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        async fn submit_lead(&self, submission: &LeadSubmission) -> Result<(), LeadSinkError> {
            if self.fail {
                return Err(LeadSinkError::Transport("connection refused".to_string()));
            }
            self.leads.lock().unwrap().push(submission.clone());
            Ok(())
        }

        async fn submit_checkout(&self, _submission: &CheckoutSubmission) -> Result<(), LeadSinkError> {
            Ok(())
        }
    }

    async fn setup(sink: Arc<RecordingSink>) -> (SubmitLeadHandler, JourneyId) {
        let catalog = Arc::new(Catalog::bundled().unwrap());
        let registry = Arc::new(JourneyRegistry::new(catalog, Arc::new(InMemoryJourneyStorage::new())));
        let id = registry.create(JourneyState::new(registry.catalog())).await;
        registry
            .update(id, |state, catalog| {
                state.apply(
                    JourneyAction::AddToCart {
                        chapter_id: "chapter-1".to_string(),
                    },
                    catalog,
                )
            })
            .await
            .unwrap();

        let handler = SubmitLeadHandler::new(registry, sink, Url::parse("https://journey.example.com/").unwrap());
        (handler, id)
    }

    #[tokio::test]
    async fn delivers_lead_with_journey_context() {
        let sink = Arc::new(RecordingSink::default());
        let (handler, id) = setup(sink.clone()).await;

        let outcome = handler
            .handle(SubmitLeadCommand {
                journey_id: id,
                lead: LeadData::new(" Ada ", "ada@example.com").with_company("Analytical Engines"),
            })
            .await
            .unwrap();

        assert!(outcome.delivered);
        let leads = sink.leads.lock().unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].lead.name, "Ada");
        assert_eq!(leads[0].context.page_url, "https://journey.example.com/?cart=chapter-1");
        assert_eq!(leads[0].context.cart_items[0].chapter_id, "chapter-1");
        assert_eq!(leads[0].context.estimated_roi, Some(72188));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_delivery() {
        let sink = Arc::new(RecordingSink::default());
        let (handler, id) = setup(sink.clone()).await;

        let err = handler
            .handle(SubmitLeadCommand {
                journey_id: id,
                lead: LeadData::new("Ada", "not-an-email"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidFormat);
        assert!(sink.leads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sink_failure_becomes_warning() {
        let sink = Arc::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        let (handler, id) = setup(sink).await;

        let outcome = handler
            .handle(SubmitLeadCommand {
                journey_id: id,
                lead: LeadData::new("Ada", "ada@example.com"),
            })
            .await
            .unwrap();

        assert!(!outcome.delivered);
        assert!(outcome.warning.unwrap().contains("connection refused"));
    }
}
