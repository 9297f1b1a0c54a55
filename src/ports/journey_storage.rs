//! Journey Storage Port - Interface for persisting journey snapshots.
//!
//! Persistence is best effort: callers log failures and carry on with the
//! in-memory state.

use async_trait::async_trait;

use crate::domain::foundation::JourneyId;
use crate::domain::journey::{JourneyError, JourneySnapshot};

/// Errors that can occur during journey storage operations
#[derive(Debug, thiserror::Error)]
pub enum JourneyStorageError {
    #[error("Journey not found: {0}")]
    NotFound(JourneyId),

    #[error("Failed to serialize journey: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize journey: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<JourneyStorageError> for JourneyError {
    fn from(err: JourneyStorageError) -> Self {
        match err {
            JourneyStorageError::NotFound(id) => JourneyError::not_found(id),
            other => JourneyError::infrastructure(other.to_string()),
        }
    }
}

/// Port for persisting and loading journey snapshots
#[async_trait]
pub trait JourneyStorage: Send + Sync {
    /// Save a snapshot, replacing any previous one.
    async fn save(&self, id: JourneyId, snapshot: &JourneySnapshot) -> Result<(), JourneyStorageError>;

    /// Load the latest snapshot.
    ///
    /// # Errors
    /// Returns `JourneyStorageError::NotFound` if nothing was saved
    async fn load(&self, id: JourneyId) -> Result<JourneySnapshot, JourneyStorageError>;

    /// Check if a snapshot exists
    async fn exists(&self, id: JourneyId) -> Result<bool, JourneyStorageError>;

    /// Delete the snapshot. Deleting a missing journey is not an error.
    async fn delete(&self, id: JourneyId) -> Result<(), JourneyStorageError>;
}
