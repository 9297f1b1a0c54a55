//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_catalog, get_chapter_suggestions, get_value_suggestions, CatalogHandlers};

/// Creates the catalog router.
pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(get_catalog))
        .route("/suggestions", get(get_value_suggestions))
        .route("/chapters/:chapter_id/suggestions", get(get_chapter_suggestions))
        .with_state(handlers)
}
