//! HTTP handlers for ROI endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::CalculateRoiRequest;
use crate::adapters::http::error::handle_journey_error;
use crate::application::{CalculateRoiHandler, CalculateRoiQuery};

#[derive(Clone)]
pub struct RoiHandlers {
    calculate_handler: Arc<CalculateRoiHandler>,
}

impl RoiHandlers {
    pub fn new(calculate_handler: Arc<CalculateRoiHandler>) -> Self {
        Self { calculate_handler }
    }
}

/// POST /api/roi/calculate - Stateless ROI report
pub async fn calculate_roi(
    State(handlers): State<RoiHandlers>,
    Json(req): Json<CalculateRoiRequest>,
) -> Response {
    let query = CalculateRoiQuery {
        inputs: req.inputs,
        chapter_ids: req.chapter_ids,
    };

    match handlers.calculate_handler.handle(query).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_journey_error(e),
    }
}
