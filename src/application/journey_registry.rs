//! JourneyRegistry - Live journeys keyed by id.
//!
//! Journeys live in memory. A journey missing from memory is rehydrated
//! from storage on first access. Every successful mutation writes a
//! snapshot back through the storage port while the registry lock is held,
//! so snapshots reach storage in commit order. Write failures are logged
//! and the in-memory state stays authoritative.
//!
//! Journeys idle longer than the configured limit are dropped from memory
//! by `evict_idle`; their stored snapshot brings them back on next access.
//! A journey whose last save failed is never evicted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::domain::catalog::Catalog;
use crate::domain::foundation::JourneyId;
use crate::domain::journey::{JourneyError, JourneyState};
use crate::ports::JourneyStorage;

struct LiveJourney {
    state: JourneyState,
    last_access: Instant,
    saved: bool,
}

impl LiveJourney {
    fn new(state: JourneyState, saved: bool) -> Self {
        Self {
            state,
            last_access: Instant::now(),
            saved,
        }
    }
}

pub struct JourneyRegistry {
    catalog: Arc<Catalog>,
    storage: Arc<dyn JourneyStorage>,
    journeys: RwLock<HashMap<JourneyId, LiveJourney>>,
}

impl JourneyRegistry {
    pub fn new(catalog: Arc<Catalog>, storage: Arc<dyn JourneyStorage>) -> Self {
        Self {
            catalog,
            storage,
            journeys: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Registers a new journey under a fresh id.
    pub async fn create(&self, state: JourneyState) -> JourneyId {
        let id = JourneyId::new();
        let mut journeys = self.journeys.write().await;
        let saved = self.persist(id, &state).await;
        journeys.insert(id, LiveJourney::new(state, saved));
        info!(journey_id = %id, "Journey started");
        id
    }

    /// Current state of a journey.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the journey is neither live nor stored
    /// - `Infrastructure` if storage fails
    pub async fn get(&self, id: JourneyId) -> Result<JourneyState, JourneyError> {
        if let Some(live) = self.journeys.write().await.get_mut(&id) {
            live.last_access = Instant::now();
            return Ok(live.state.clone());
        }

        let snapshot = self.storage.load(id).await?;
        let state = JourneyState::from_snapshot(snapshot, &self.catalog);
        debug!(journey_id = %id, "Journey rehydrated from storage");

        // Another request may have hydrated the same journey meanwhile
        let mut journeys = self.journeys.write().await;
        let live = journeys.entry(id).or_insert_with(|| LiveJourney::new(state, true));
        live.last_access = Instant::now();
        Ok(live.state.clone())
    }

    /// Runs `f` against a working copy of the journey and commits it only
    /// when `f` succeeds. Returns `f`'s output and the committed state.
    pub async fn update<F, T>(&self, id: JourneyId, f: F) -> Result<(T, JourneyState), JourneyError>
    where
        F: FnOnce(&mut JourneyState, &Catalog) -> Result<T, JourneyError>,
    {
        self.get(id).await?;

        let mut journeys = self.journeys.write().await;
        let live = journeys.get_mut(&id).ok_or(JourneyError::NotFound(id))?;

        let mut working = live.state.clone();
        let output = f(&mut working, &self.catalog)?;
        live.state = working.clone();
        live.last_access = Instant::now();
        live.saved = self.persist(id, &working).await;

        Ok((output, working))
    }

    /// Drops journeys untouched for at least `max_idle` whose latest
    /// snapshot reached storage. Returns how many were dropped.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut journeys = self.journeys.write().await;
        let before = journeys.len();
        journeys.retain(|_, live| !live.saved || live.last_access.elapsed() < max_idle);
        let evicted = before - journeys.len();
        if evicted > 0 {
            debug!(evicted, live = journeys.len(), "Idle journeys evicted");
        }
        evicted
    }

    /// Evicts idle journeys every `interval` until `shutdown` turns true.
    pub async fn run_idle_sweep(&self, interval: Duration, max_idle: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = time::interval(interval);
        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        return;
                    }
                }
                _ = ticker.tick() => {
                    self.evict_idle(max_idle).await;
                }
            }
        }
    }

    /// Number of live journeys.
    pub async fn len(&self) -> usize {
        self.journeys.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.journeys.read().await.is_empty()
    }

    async fn persist(&self, id: JourneyId, state: &JourneyState) -> bool {
        match self.storage.save(id, &state.snapshot()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(journey_id = %id, error = %e, "Failed to persist journey");
                false
            }
        }
    }
}
