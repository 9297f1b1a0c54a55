//! HTTP handlers for journey endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    CheckoutRequest, CheckoutResponse, LeadResponse, ShareLinkResponse, StartJourneyRequest,
    StartJourneyResponse,
};
use crate::adapters::http::error::{handle_journey_error, invalid_journey_id};
use crate::application::{
    ApplyActionCommand, ApplyActionHandler, GetJourneyHandler, GetJourneyQuery, GetShareLinkHandler,
    GetShareLinkQuery, StartJourneyCommand, StartJourneyHandler, SubmitCheckoutCommand,
    SubmitCheckoutHandler, SubmitLeadCommand, SubmitLeadHandler,
};
use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneyAction;
use crate::domain::lead::LeadData;
use crate::domain::share::ShareLink;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct JourneyHandlers {
    start_handler: Arc<StartJourneyHandler>,
    apply_handler: Arc<ApplyActionHandler>,
    get_handler: Arc<GetJourneyHandler>,
    share_handler: Arc<GetShareLinkHandler>,
    lead_handler: Arc<SubmitLeadHandler>,
    checkout_handler: Arc<SubmitCheckoutHandler>,
}

impl JourneyHandlers {
    pub fn new(
        start_handler: Arc<StartJourneyHandler>,
        apply_handler: Arc<ApplyActionHandler>,
        get_handler: Arc<GetJourneyHandler>,
        share_handler: Arc<GetShareLinkHandler>,
        lead_handler: Arc<SubmitLeadHandler>,
        checkout_handler: Arc<SubmitCheckoutHandler>,
    ) -> Self {
        Self {
            start_handler,
            apply_handler,
            get_handler,
            share_handler,
            lead_handler,
            checkout_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/journeys - Start a journey
pub async fn start_journey(
    State(handlers): State<JourneyHandlers>,
    Json(req): Json<StartJourneyRequest>,
) -> Response {
    let cmd = StartJourneyCommand {
        viewer_name: req.viewer_name,
        share: req.share_query.as_deref().map(ShareLink::parse_query),
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => {
            let response = StartJourneyResponse {
                journey: result.journey,
                share_outcome: result.share_outcome,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_journey_error(e),
    }
}

/// GET /api/journeys/:id - Journey state with derived totals and ROI report
pub async fn get_journey(
    State(handlers): State<JourneyHandlers>,
    Path(journey_id): Path<String>,
) -> Response {
    let Ok(journey_id) = journey_id.parse::<JourneyId>() else {
        return invalid_journey_id();
    };

    match handlers.get_handler.handle(GetJourneyQuery { journey_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_journey_error(e),
    }
}

/// POST /api/journeys/:id/actions - Apply one action
pub async fn apply_action(
    State(handlers): State<JourneyHandlers>,
    Path(journey_id): Path<String>,
    Json(action): Json<JourneyAction>,
) -> Response {
    let Ok(journey_id) = journey_id.parse::<JourneyId>() else {
        return invalid_journey_id();
    };

    match handlers
        .apply_handler
        .handle(ApplyActionCommand { journey_id, action })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_journey_error(e),
    }
}

/// GET /api/journeys/:id/share-link - Share URL for the journey
pub async fn get_share_link(
    State(handlers): State<JourneyHandlers>,
    Path(journey_id): Path<String>,
) -> Response {
    let Ok(journey_id) = journey_id.parse::<JourneyId>() else {
        return invalid_journey_id();
    };

    match handlers.share_handler.handle(GetShareLinkQuery { journey_id }).await {
        Ok(result) => (StatusCode::OK, Json(ShareLinkResponse::from(result))).into_response(),
        Err(e) => handle_journey_error(e),
    }
}

/// POST /api/journeys/:id/leads - Submit the lead capture form
///
/// Returns 202 whether or not the CRM accepted it; `delivered` says which.
pub async fn submit_lead(
    State(handlers): State<JourneyHandlers>,
    Path(journey_id): Path<String>,
    Json(lead): Json<LeadData>,
) -> Response {
    let Ok(journey_id) = journey_id.parse::<JourneyId>() else {
        return invalid_journey_id();
    };

    match handlers
        .lead_handler
        .handle(SubmitLeadCommand { journey_id, lead })
        .await
    {
        Ok(outcome) => {
            let response: LeadResponse = outcome;
            (StatusCode::ACCEPTED, Json(response)).into_response()
        }
        Err(e) => handle_journey_error(e),
    }
}

/// POST /api/journeys/:id/checkout - Complete checkout
pub async fn submit_checkout(
    State(handlers): State<JourneyHandlers>,
    Path(journey_id): Path<String>,
    Json(req): Json<CheckoutRequest>,
) -> Response {
    let Ok(journey_id) = journey_id.parse::<JourneyId>() else {
        return invalid_journey_id();
    };

    let cmd = SubmitCheckoutCommand {
        journey_id,
        lead: req.lead,
        payment_method: req.payment_method,
    };

    match handlers.checkout_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(CheckoutResponse::from(result))).into_response(),
        Err(e) => handle_journey_error(e),
    }
}
