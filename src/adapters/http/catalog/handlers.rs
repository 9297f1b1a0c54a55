//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{CatalogResponse, SuggestionsResponse};
use crate::adapters::http::error::ErrorResponse;
use crate::domain::catalog::Catalog;

#[derive(Clone)]
pub struct CatalogHandlers {
    catalog: Arc<Catalog>,
}

impl CatalogHandlers {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

/// GET /api/catalog - Chapters, packages, ROI settings and brand
pub async fn get_catalog(State(handlers): State<CatalogHandlers>) -> Response {
    let response = CatalogResponse::from(handlers.catalog.as_ref());
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/catalog/chapters/:chapter_id/suggestions - Follow-up ideas for a chapter
pub async fn get_chapter_suggestions(
    State(handlers): State<CatalogHandlers>,
    Path(chapter_id): Path<String>,
) -> Response {
    match handlers.catalog.suggestions_for(&chapter_id) {
        Some(suggestions) => {
            let response = SuggestionsResponse {
                chapter_id: Some(chapter_id),
                suggestions,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Chapter", &chapter_id)),
        )
            .into_response(),
    }
}

/// GET /api/catalog/suggestions - Value and cost optimization suggestions
pub async fn get_value_suggestions(State(handlers): State<CatalogHandlers>) -> Response {
    let response = SuggestionsResponse {
        chapter_id: None,
        suggestions: handlers.catalog.value_suggestions().to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
