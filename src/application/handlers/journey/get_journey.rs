//! GetJourneyHandler - Query handler for a journey's current view.

use std::sync::Arc;

use crate::application::{JourneyRegistry, JourneyView};
use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneyError;

/// Query to get a journey by ID.
#[derive(Debug, Clone)]
pub struct GetJourneyQuery {
    pub journey_id: JourneyId,
}

/// Handler for retrieving journeys.
pub struct GetJourneyHandler {
    registry: Arc<JourneyRegistry>,
}

impl GetJourneyHandler {
    pub fn new(registry: Arc<JourneyRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetJourneyQuery) -> Result<JourneyView, JourneyError> {
        let state = self.registry.get(query.journey_id).await?;
        Ok(JourneyView::new(query.journey_id, state, self.registry.catalog()))
    }
}
