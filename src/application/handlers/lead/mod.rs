//! Lead and checkout command handlers.

mod delivery;
mod submit_checkout;
mod submit_lead;

pub use delivery::DeliveryOutcome;
pub use submit_checkout::{SubmitCheckoutCommand, SubmitCheckoutHandler, SubmitCheckoutResult};
pub use submit_lead::{SubmitLeadCommand, SubmitLeadHandler};
