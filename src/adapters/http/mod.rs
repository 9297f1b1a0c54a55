//! HTTP adapters - REST API implementations.
//!
//! Each module has its own dto/handlers/routes split; `api_router` wires
//! them together under `/api`.

pub mod catalog;
pub mod error;
pub mod journey;
pub mod roi;

use std::sync::Arc;

use axum::Router;
use reqwest::Url;

use crate::application::{
    ApplyActionHandler, CalculateRoiHandler, GetJourneyHandler, GetShareLinkHandler, JourneyRegistry,
    StartJourneyHandler, SubmitCheckoutHandler, SubmitLeadHandler,
};
use crate::domain::catalog::Catalog;
use crate::ports::LeadSink;

pub use catalog::{catalog_routes, CatalogHandlers};
pub use error::{handle_journey_error, ErrorResponse};
pub use journey::{journey_routes, JourneyHandlers};
pub use roi::{roi_routes, RoiHandlers};

/// Everything the API needs from the outside world.
pub struct ApiDependencies {
    pub catalog: Arc<Catalog>,
    /// Live journeys; shared with the idle sweep.
    pub registry: Arc<JourneyRegistry>,
    pub lead_sink: Arc<dyn LeadSink>,
    /// Base URL share links point at.
    pub public_url: Url,
}

/// Builds the complete API router.
///
/// # Routes
///
/// - `/api/catalog` - catalog, chapter and value suggestions
/// - `/api/roi/calculate` - stateless ROI report
/// - `/api/journeys` - journey lifecycle, share links, leads and checkout
pub fn api_router(deps: ApiDependencies) -> Router {
    let registry = deps.registry;

    let journeys = JourneyHandlers::new(
        Arc::new(StartJourneyHandler::new(registry.clone())),
        Arc::new(ApplyActionHandler::new(registry.clone())),
        Arc::new(GetJourneyHandler::new(registry.clone())),
        Arc::new(GetShareLinkHandler::new(registry.clone(), deps.public_url.clone())),
        Arc::new(SubmitLeadHandler::new(
            registry.clone(),
            deps.lead_sink.clone(),
            deps.public_url,
        )),
        Arc::new(SubmitCheckoutHandler::new(registry, deps.lead_sink)),
    );
    let roi = RoiHandlers::new(Arc::new(CalculateRoiHandler::new(Arc::clone(&deps.catalog))));

    Router::new()
        .nest("/api/catalog", catalog_routes(CatalogHandlers::new(deps.catalog)))
        .nest("/api/roi", roi_routes(roi))
        .nest("/api/journeys", journey_routes(journeys))
}
