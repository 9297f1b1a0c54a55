//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Journey snapshot persistence (file, in-memory, debounced)
//! - `crm` - Lead delivery (webhook, logging)
//! - `http` - REST API

pub mod crm;
pub mod http;
pub mod storage;

pub use crm::{LoggingLeadSink, WebhookConfig, WebhookLeadSink};
pub use http::{api_router, ApiDependencies};
pub use storage::{DebouncedPersister, FileJourneyStorage, InMemoryJourneyStorage, DEFAULT_DEBOUNCE};
