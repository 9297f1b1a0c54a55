//! File-based Journey Storage Adapter
//!
//! Stores each journey snapshot as `{journey_id}.json` under a base directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneySnapshot;
use crate::ports::{JourneyStorage, JourneyStorageError};

/// File-based storage for journey snapshots
#[derive(Debug, Clone)]
pub struct FileJourneyStorage {
    base_path: PathBuf,
}

impl FileJourneyStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileJourneyStorage::new("./data/journeys");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the snapshot file path for a journey
    fn snapshot_path(&self, id: JourneyId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    async fn ensure_dir(&self) -> Result<(), JourneyStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| JourneyStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl JourneyStorage for FileJourneyStorage {
    async fn save(&self, id: JourneyId, snapshot: &JourneySnapshot) -> Result<(), JourneyStorageError> {
        self.ensure_dir().await?;

        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| JourneyStorageError::SerializationFailed(e.to_string()))?;

        // Readers never observe a partially written snapshot
        let path = self.snapshot_path(id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .await
            .map_err(|e| JourneyStorageError::IoError(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| JourneyStorageError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, id: JourneyId) -> Result<JourneySnapshot, JourneyStorageError> {
        let path = self.snapshot_path(id);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(JourneyStorageError::NotFound(id));
            }
            Err(e) => return Err(JourneyStorageError::IoError(e.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|e| JourneyStorageError::DeserializationFailed(e.to_string()))
    }

    async fn exists(&self, id: JourneyId) -> Result<bool, JourneyStorageError> {
        fs::try_exists(self.snapshot_path(id))
            .await
            .map_err(|e| JourneyStorageError::IoError(e.to_string()))
    }

    async fn delete(&self, id: JourneyId) -> Result<(), JourneyStorageError> {
        match fs::remove_file(self.snapshot_path(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JourneyStorageError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::journey::{JourneyAction, JourneyState};
    use tempfile::TempDir;

    fn snapshot() -> JourneySnapshot {
        let catalog = Catalog::bundled().unwrap();
        let mut state = JourneyState::new(&catalog);
        state
            .apply(
                JourneyAction::AddToCart {
                    chapter_id: "chapter-2".to_string(),
                },
                &catalog,
            )
            .unwrap();
        state.snapshot()
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = FileJourneyStorage::new(dir.path());
        let id = JourneyId::new();
        let snapshot = snapshot();

        storage.save(id, &snapshot).await.unwrap();
        let loaded = storage.load(id).await.unwrap();

        assert_eq!(loaded, snapshot);
        assert!(dir.path().join(format!("{}.json", id)).exists());
    }

    #[tokio::test]
    async fn save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let storage = FileJourneyStorage::new(dir.path().join("nested").join("journeys"));
        let id = JourneyId::new();

        storage.save(id, &snapshot()).await.unwrap();
        assert!(storage.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn load_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = FileJourneyStorage::new(dir.path());
        let result = storage.load(JourneyId::new()).await;
        assert!(matches!(result, Err(JourneyStorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn load_corrupt_file_fails_to_deserialize() {
        let dir = TempDir::new().unwrap();
        let storage = FileJourneyStorage::new(dir.path());
        let id = JourneyId::new();
        std::fs::write(dir.path().join(format!("{}.json", id)), "{not json").unwrap();

        let result = storage.load(id).await;
        assert!(matches!(result, Err(JourneyStorageError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn delete_removes_snapshot_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = FileJourneyStorage::new(dir.path());
        let id = JourneyId::new();

        storage.save(id, &snapshot()).await.unwrap();
        storage.delete(id).await.unwrap();
        assert!(!storage.exists(id).await.unwrap());
        storage.delete(id).await.unwrap();
    }
}
