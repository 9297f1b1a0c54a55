//! HTTP adapter for journey endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CheckoutRequest, CheckoutResponse, LeadResponse, ShareLinkResponse, StartJourneyRequest,
    StartJourneyResponse,
};
pub use handlers::JourneyHandlers;
pub use routes::journey_routes;
