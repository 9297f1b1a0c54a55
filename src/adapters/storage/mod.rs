//! Storage Adapters
//!
//! Implementations of the JourneyStorage port plus the debounced writer
//! that sits in front of them.
//!
//! ## Available Adapters
//!
//! - **FileJourneyStorage** - One JSON file per journey
//! - **InMemoryJourneyStorage** - Snapshots in memory (persistence disabled, tests)
//! - **DebouncedPersister** - Delays and coalesces saves
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{DebouncedPersister, FileJourneyStorage};
//!
//! let storage = Arc::new(FileJourneyStorage::new("./data/journeys"));
//! let persister = DebouncedPersister::new(storage, Duration::from_millis(500));
//! ```

mod debounced_persister;
mod file_journey_storage;
mod in_memory_journey_storage;

pub use debounced_persister::{DebouncedPersister, DEFAULT_DEBOUNCE};
pub use file_journey_storage::FileJourneyStorage;
pub use in_memory_journey_storage::InMemoryJourneyStorage;
