//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod journey;
pub mod lead;
pub mod roi;

pub use journey::{
    ApplyActionCommand, ApplyActionHandler, GetJourneyHandler, GetJourneyQuery,
    GetShareLinkHandler, GetShareLinkQuery, ShareLinkResult, StartJourneyCommand,
    StartJourneyHandler, StartJourneyResult,
};
pub use lead::{
    DeliveryOutcome, SubmitCheckoutCommand, SubmitCheckoutHandler, SubmitCheckoutResult,
    SubmitLeadCommand, SubmitLeadHandler,
};
pub use roi::{CalculateRoiHandler, CalculateRoiQuery};
