//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `JourneyStorage` - Persistence of journey snapshots
//! - `LeadSink` - Delivery of leads and checkouts to a CRM

mod journey_storage;
mod lead_sink;

pub use journey_storage::{JourneyStorage, JourneyStorageError};
pub use lead_sink::{LeadSink, LeadSinkError};
