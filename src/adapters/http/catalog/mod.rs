//! HTTP adapter for catalog endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CatalogResponse, SuggestionsResponse};
pub use handlers::CatalogHandlers;
pub use routes::catalog_routes;
