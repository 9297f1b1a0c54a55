//! HTTP adapter for the stateless ROI calculator.

mod dto;
mod handlers;
mod routes;

pub use dto::CalculateRoiRequest;
pub use handlers::RoiHandlers;
pub use routes::roi_routes;
