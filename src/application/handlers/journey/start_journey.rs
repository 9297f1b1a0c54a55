//! StartJourneyHandler - Command handler for starting a journey.

use std::sync::Arc;

use crate::application::{JourneyRegistry, JourneyView};
use crate::domain::journey::{JourneyAction, JourneyError, JourneyState};
use crate::domain::share::{ShareApplyOutcome, ShareLink};

/// Command to start a journey, optionally seeded from a share link.
#[derive(Debug, Clone, Default)]
pub struct StartJourneyCommand {
    pub viewer_name: Option<String>,
    pub share: Option<ShareLink>,
}

/// Result of starting a journey.
#[derive(Debug, Clone)]
pub struct StartJourneyResult {
    pub journey: JourneyView,
    pub share_outcome: Option<ShareApplyOutcome>,
}

/// Handler for starting journeys.
pub struct StartJourneyHandler {
    registry: Arc<JourneyRegistry>,
}

impl StartJourneyHandler {
    pub fn new(registry: Arc<JourneyRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: StartJourneyCommand) -> Result<StartJourneyResult, JourneyError> {
        let catalog = self.registry.catalog();
        let mut state = JourneyState::new(catalog);

        let share_outcome = cmd.share.map(|link| link.apply_to(&mut state, catalog));

        // An explicit name wins over one carried in the link
        if let Some(name) = cmd.viewer_name {
            state.apply(JourneyAction::SetViewerName(name), catalog)?;
        }

        let id = self.registry.create(state.clone()).await;

        Ok(StartJourneyResult {
            journey: JourneyView::new(id, state, catalog),
            share_outcome,
        })
    }
}
