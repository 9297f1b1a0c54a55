//! DebouncedPersister - Coalesces bursts of journey saves.
//!
//! Every mutation schedules a save; a save only reaches storage once the
//! journey has been quiet for the configured delay. Each `schedule` call
//! for the same journey restarts its timer.
//!
//! Failures are logged and dropped. The in-memory journey stays
//! authoritative.
//!
//! The persister is itself a `JourneyStorage`: `save` schedules, and reads
//! see a waiting snapshot before falling through to the wrapped storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneySnapshot;
use crate::ports::{JourneyStorage, JourneyStorageError};

/// Default quiet period before a save is written.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

struct PendingSave {
    generation: u64,
    snapshot: JourneySnapshot,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct PendingState {
    next_generation: u64,
    saves: HashMap<JourneyId, PendingSave>,
}

/// Per-journey cancellable save timers.
#[derive(Clone)]
pub struct DebouncedPersister {
    storage: Arc<dyn JourneyStorage>,
    delay: Duration,
    pending: Arc<Mutex<PendingState>>,
}

impl DebouncedPersister {
    pub fn new(storage: Arc<dyn JourneyStorage>, delay: Duration) -> Self {
        Self {
            storage,
            delay,
            pending: Arc::new(Mutex::new(PendingState::default())),
        }
    }

    /// Schedules a save, replacing any save still waiting for this journey.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, id: JourneyId, snapshot: JourneySnapshot) {
        let storage = Arc::clone(&self.storage);
        let pending = Arc::clone(&self.pending);
        let delay = self.delay;
        let to_save = snapshot.clone();

        // Held until the new entry is registered, so the task cannot finish first
        let mut state = lock(&self.pending);
        state.next_generation += 1;
        let generation = state.next_generation;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            match storage.save(id, &to_save).await {
                Ok(()) => debug!(journey_id = %id, "Journey saved"),
                Err(e) => warn!(journey_id = %id, error = %e, "Failed to save journey"),
            }

            let mut state = lock(&pending);
            if state.saves.get(&id).map(|p| p.generation) == Some(generation) {
                state.saves.remove(&id);
            }
        });

        let previous = state.saves.insert(
            id,
            PendingSave {
                generation,
                snapshot,
                handle,
            },
        );
        if let Some(previous) = previous {
            previous.handle.abort();
        }
    }

    /// Drops the waiting save for a journey. Returns false if none was pending.
    pub fn cancel(&self, id: JourneyId) -> bool {
        match lock(&self.pending).saves.remove(&id) {
            Some(previous) => {
                previous.handle.abort();
                true
            }
            None => false,
        }
    }

    /// Number of journeys with a save still waiting.
    pub fn pending_count(&self) -> usize {
        lock(&self.pending).saves.len()
    }

    /// Writes every waiting save immediately. Used on shutdown.
    pub async fn flush_all(&self) -> usize {
        let drained: Vec<(JourneyId, PendingSave)> = lock(&self.pending).saves.drain().collect();

        let mut saved = 0;
        for (id, pending) in drained {
            pending.handle.abort();
            match self.storage.save(id, &pending.snapshot).await {
                Ok(()) => saved += 1,
                Err(e) => warn!(journey_id = %id, error = %e, "Failed to flush journey"),
            }
        }
        saved
    }
}

#[async_trait]
impl JourneyStorage for DebouncedPersister {
    async fn save(&self, id: JourneyId, snapshot: &JourneySnapshot) -> Result<(), JourneyStorageError> {
        self.schedule(id, snapshot.clone());
        Ok(())
    }

    async fn load(&self, id: JourneyId) -> Result<JourneySnapshot, JourneyStorageError> {
        let waiting = lock(&self.pending).saves.get(&id).map(|p| p.snapshot.clone());
        match waiting {
            Some(snapshot) => Ok(snapshot),
            None => self.storage.load(id).await,
        }
    }

    async fn exists(&self, id: JourneyId) -> Result<bool, JourneyStorageError> {
        if lock(&self.pending).saves.contains_key(&id) {
            return Ok(true);
        }
        self.storage.exists(id).await
    }

    async fn delete(&self, id: JourneyId) -> Result<(), JourneyStorageError> {
        self.cancel(id);
        self.storage.delete(id).await
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
