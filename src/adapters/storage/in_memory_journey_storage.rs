//! In-Memory Journey Storage Adapter
//!
//! Keeps snapshots in memory. Used when persistence is disabled and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneySnapshot;
use crate::ports::{JourneyStorage, JourneyStorageError};

/// In-memory storage for journey snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemoryJourneyStorage {
    snapshots: Arc<RwLock<HashMap<JourneyId, JourneySnapshot>>>,
}

impl InMemoryJourneyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
    }
}

#[async_trait]
impl JourneyStorage for InMemoryJourneyStorage {
    async fn save(&self, id: JourneyId, snapshot: &JourneySnapshot) -> Result<(), JourneyStorageError> {
        self.snapshots.write().await.insert(id, snapshot.clone());
        Ok(())
    }

    async fn load(&self, id: JourneyId) -> Result<JourneySnapshot, JourneyStorageError> {
        self.snapshots
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(JourneyStorageError::NotFound(id))
    }

    async fn exists(&self, id: JourneyId) -> Result<bool, JourneyStorageError> {
        Ok(self.snapshots.read().await.contains_key(&id))
    }

    async fn delete(&self, id: JourneyId) -> Result<(), JourneyStorageError> {
        self.snapshots.write().await.remove(&id);
        Ok(())
    }
}
