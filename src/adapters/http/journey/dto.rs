//! DTOs for journey endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{DeliveryOutcome, JourneyView, ShareLinkResult, SubmitCheckoutResult};
use crate::domain::lead::LeadData;
use crate::domain::roi::format_currency;
use crate::domain::share::{ShareApplyOutcome, ShareLink};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a journey.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StartJourneyRequest {
    pub viewer_name: Option<String>,
    /// Query string of a share link, with or without the leading `?`.
    pub share_query: Option<String>,
}

/// Request to complete checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub lead: LeadData,
    #[serde(default)]
    pub payment_method: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a newly started journey.
#[derive(Debug, Clone, Serialize)]
pub struct StartJourneyResponse {
    pub journey: JourneyView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_outcome: Option<ShareApplyOutcome>,
}

/// Share URL for a journey.
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub url: String,
    pub params: ShareLink,
}

impl From<ShareLinkResult> for ShareLinkResponse {
    fn from(result: ShareLinkResult) -> Self {
        Self {
            url: result.url.to_string(),
            params: result.link,
        }
    }
}

/// Response for a lead submission.
pub type LeadResponse = DeliveryOutcome;

/// Response for a completed checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub journey: JourneyView,
    pub total_cost: u64,
    pub total_cost_display: String,
    pub delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<SubmitCheckoutResult> for CheckoutResponse {
    fn from(result: SubmitCheckoutResult) -> Self {
        Self {
            total_cost_display: format_currency(result.total_cost as f64),
            total_cost: result.total_cost,
            journey: result.journey,
            delivered: result.delivery.delivered,
            warning: result.delivery.warning,
        }
    }
}
