//! Logging Lead Sink - Used when no CRM webhook is configured.

use async_trait::async_trait;
use tracing::info;

use crate::domain::lead::{CheckoutSubmission, LeadSubmission};
use crate::ports::{LeadSink, LeadSinkError};

/// Logs submissions and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLeadSink;

impl LoggingLeadSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeadSink for LoggingLeadSink {
    async fn submit_lead(&self, submission: &LeadSubmission) -> Result<(), LeadSinkError> {
        info!(
            name = %submission.lead.name,
            email = %submission.lead.email,
            cart_items = submission.context.cart_items.len(),
            "CRM webhook not configured; lead logged only"
        );
        Ok(())
    }

    async fn submit_checkout(&self, submission: &CheckoutSubmission) -> Result<(), LeadSinkError> {
        info!(
            email = %submission.lead.email,
            total_cost = submission.order.total_cost,
            "CRM webhook not configured; checkout logged only"
        );
        Ok(())
    }
}
