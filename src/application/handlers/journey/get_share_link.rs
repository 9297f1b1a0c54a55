//! GetShareLinkHandler - Query handler building a journey's share URL.

use std::sync::Arc;

use reqwest::Url;

use crate::application::JourneyRegistry;
use crate::domain::foundation::JourneyId;
use crate::domain::journey::JourneyError;
use crate::domain::share::ShareLink;

/// Query for a journey's share link.
#[derive(Debug, Clone)]
pub struct GetShareLinkQuery {
    pub journey_id: JourneyId,
}

/// Share URL together with the parameters it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLinkResult {
    pub url: Url,
    pub link: ShareLink,
}

/// Handler for share links.
pub struct GetShareLinkHandler {
    registry: Arc<JourneyRegistry>,
    base_url: Url,
}

impl GetShareLinkHandler {
    pub fn new(registry: Arc<JourneyRegistry>, base_url: Url) -> Self {
        Self { registry, base_url }
    }

    pub async fn handle(&self, query: GetShareLinkQuery) -> Result<ShareLinkResult, JourneyError> {
        let state = self.registry.get(query.journey_id).await?;
        let link = ShareLink::from_state(&state, &self.registry.catalog().default_inputs());

        Ok(ShareLinkResult {
            url: link.to_url(&self.base_url),
            link,
        })
    }
}
