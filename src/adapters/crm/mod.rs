//! CRM Adapters
//!
//! Implementations of the LeadSink port.
//!
//! - **WebhookLeadSink** - JSON POST to a configured webhook
//! - **LoggingLeadSink** - Logs only; used when no webhook is configured

mod logging_lead_sink;
mod webhook_lead_sink;

pub use logging_lead_sink::LoggingLeadSink;
pub use webhook_lead_sink::{WebhookConfig, WebhookLeadSink};
