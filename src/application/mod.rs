//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Live journeys are held by the `JourneyRegistry`; handlers read and
//! mutate them through it.

pub mod handlers;
mod journey_registry;
mod journey_view;

pub use handlers::{
    // Journey handlers
    ApplyActionCommand, ApplyActionHandler, GetJourneyHandler, GetJourneyQuery,
    GetShareLinkHandler, GetShareLinkQuery, ShareLinkResult, StartJourneyCommand,
    StartJourneyHandler, StartJourneyResult,
    // Lead handlers
    DeliveryOutcome, SubmitCheckoutCommand, SubmitCheckoutHandler, SubmitCheckoutResult,
    SubmitLeadCommand, SubmitLeadHandler,
    // ROI handlers
    CalculateRoiHandler, CalculateRoiQuery,
};
pub use journey_registry::JourneyRegistry;
pub use journey_view::JourneyView;
