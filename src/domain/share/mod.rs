//! Share links - journey state carried in a URL query.

mod share_link;

pub use share_link::{ShareApplyOutcome, ShareLink};
