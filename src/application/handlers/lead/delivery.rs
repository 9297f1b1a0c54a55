//! Outcome of handing a submission to the CRM.

use serde::Serialize;
use tracing::warn;

use crate::domain::foundation::JourneyId;
use crate::ports::LeadSinkError;

/// Whether the CRM accepted a submission.
///
/// Delivery failures are reported here, never as handler errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryOutcome {
    pub delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl DeliveryOutcome {
    pub fn from_result(journey_id: JourneyId, kind: &str, result: Result<(), LeadSinkError>) -> Self {
        match result {
            Ok(()) => Self {
                delivered: true,
                warning: None,
            },
            Err(e) => {
                warn!(journey_id = %journey_id, kind, error = %e, "CRM delivery failed");
                Self {
                    delivered: false,
                    warning: Some(format!("Submission could not be delivered to the CRM: {}", e)),
                }
            }
        }
    }
}
