//! HTTP routes for ROI endpoints.

use axum::{routing::post, Router};

use super::handlers::{calculate_roi, RoiHandlers};

/// Creates the ROI router.
pub fn roi_routes(handlers: RoiHandlers) -> Router {
    Router::new()
        .route("/calculate", post(calculate_roi))
        .with_state(handlers)
}
