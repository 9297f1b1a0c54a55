//! Error responses shared by every HTTP module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::journey::JourneyError;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Response carrying a domain error code.
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Validation failure with the offending field in `details`.
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            code: ErrorCode::from(err).to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "field": err.field() })),
        }
    }
}

/// Maps journey errors to HTTP responses.
///
/// | Error | Status |
/// |-------|--------|
/// | `NotFound` | 404 |
/// | `Validation`, `ChapterIndexOutOfRange` | 400 |
/// | `ChapterNotFound`, `PackageNotFound` | 422 |
/// | `NothingToCheckout` | 409 |
/// | `Infrastructure` | 500 |
pub fn handle_journey_error(error: JourneyError) -> Response {
    match error {
        JourneyError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Journey", &id.to_string())),
        )
            .into_response(),
        JourneyError::Validation(err) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&err))).into_response()
        }
        err @ JourneyError::ChapterIndexOutOfRange { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::from_code(err.code(), err.message())),
        )
            .into_response(),
        err @ (JourneyError::ChapterNotFound(_) | JourneyError::PackageNotFound(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::from_code(err.code(), err.message())),
        )
            .into_response(),
        err @ JourneyError::NothingToCheckout => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::from_code(err.code(), err.message())),
        )
            .into_response(),
        JourneyError::Infrastructure(msg) => {
            error!(error = %msg, "Journey request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

/// 400 response for a path id that is not a journey id.
pub fn invalid_journey_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid journey ID")),
    )
        .into_response()
}
