//! Webhook Lead Sink - Posts leads and checkouts as JSON to a CRM webhook
//! (Zapier, Make.com and similar).

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::lead::{CheckoutSubmission, LeadSubmission};
use crate::ports::{LeadSink, LeadSinkError};

/// Configuration for the webhook sink.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Webhook URL. Often carries an embedded token, so it is kept secret.
    url: Secret<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Secret::new(url.into()),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self) -> &str {
        self.url.expose_secret()
    }
}

/// CRM sink delivering over HTTP.
pub struct WebhookLeadSink {
    config: WebhookConfig,
    client: Client,
}

impl WebhookLeadSink {
    /// Creates a sink with its own HTTP client.
    pub fn new(config: WebhookConfig) -> Result<Self, LeadSinkError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LeadSinkError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn post<T: Serialize + Sync>(&self, kind: &'static str, body: &T) -> Result<(), LeadSinkError> {
        let response = self
            .client
            .post(self.config.url())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors include the URL; strip it
                LeadSinkError::Transport(e.without_url().to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(kind, status = status.as_u16(), "CRM webhook rejected submission");
            return Err(LeadSinkError::Rejected {
                status: status.as_u16(),
            });
        }

        info!(kind, "Submitted to CRM");
        Ok(())
    }
}

#[async_trait]
impl LeadSink for WebhookLeadSink {
    async fn submit_lead(&self, submission: &LeadSubmission) -> Result<(), LeadSinkError> {
        self.post("lead", submission).await
    }

    async fn submit_checkout(&self, submission: &CheckoutSubmission) -> Result<(), LeadSinkError> {
        self.post("checkout", submission).await
    }
}
