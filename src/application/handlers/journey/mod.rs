//! Journey command and query handlers.

mod apply_action;
mod get_journey;
mod get_share_link;
mod start_journey;

pub use apply_action::{ApplyActionCommand, ApplyActionHandler};
pub use get_journey::{GetJourneyHandler, GetJourneyQuery};
pub use get_share_link::{GetShareLinkHandler, GetShareLinkQuery, ShareLinkResult};
pub use start_journey::{StartJourneyCommand, StartJourneyHandler, StartJourneyResult};
