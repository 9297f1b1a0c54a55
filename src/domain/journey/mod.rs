//! Journey module - the visitor's path through the book.

mod action;
mod errors;
mod snapshot;
mod state;
mod view;

pub use action::JourneyAction;
pub use errors::JourneyError;
pub use snapshot::JourneySnapshot;
pub use state::{JourneyState, MAX_VIEWER_NAME_LENGTH};
pub use view::{AppView, PageTransition};
