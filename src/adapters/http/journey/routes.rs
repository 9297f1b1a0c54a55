//! HTTP routes for journey endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    apply_action, get_journey, get_share_link, start_journey, submit_checkout, submit_lead,
    JourneyHandlers,
};

/// Creates the journey router with all endpoints.
pub fn journey_routes(handlers: JourneyHandlers) -> Router {
    Router::new()
        .route("/", post(start_journey))
        .route("/:id", get(get_journey))
        .route("/:id/actions", post(apply_action))
        .route("/:id/share-link", get(get_share_link))
        .route("/:id/leads", post(submit_lead))
        .route("/:id/checkout", post(submit_checkout))
        .with_state(handlers)
}
