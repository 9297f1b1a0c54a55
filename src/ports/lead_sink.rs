//! Lead Sink Port - Interface for delivering leads and checkouts to a CRM.

use async_trait::async_trait;

use crate::domain::lead::{CheckoutSubmission, LeadSubmission};

/// Errors from CRM delivery.
#[derive(Debug, thiserror::Error)]
pub enum LeadSinkError {
    #[error("Request to CRM failed: {0}")]
    Transport(String),

    #[error("CRM webhook returned {status}")]
    Rejected { status: u16 },
}

/// Destination for lead and checkout submissions.
///
/// Delivery failures never change journey state; callers report them as a
/// warning.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn submit_lead(&self, submission: &LeadSubmission) -> Result<(), LeadSinkError>;

    async fn submit_checkout(&self, submission: &CheckoutSubmission) -> Result<(), LeadSinkError>;
}
