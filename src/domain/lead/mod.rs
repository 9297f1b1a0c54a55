//! Lead module - contact details and CRM payloads.

mod lead_data;
mod submission;

pub use lead_data::LeadData;
pub use submission::{
    CartItemSummary, CheckoutOrder, CheckoutSubmission, LeadContext, LeadSubmission, SubmissionKind,
};
