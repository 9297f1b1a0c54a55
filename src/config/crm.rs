//! CRM webhook configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::crm::WebhookConfig;

/// CRM webhook configuration (Zapier, Make.com and similar)
#[derive(Debug, Clone, Deserialize)]
pub struct CrmConfig {
    /// Webhook URL; leads are only logged when unset
    pub webhook_url: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CrmConfig {
    /// Webhook settings, if a URL is configured
    pub fn webhook(&self) -> Option<WebhookConfig> {
        let url = self.webhook_url.as_ref()?.expose_secret().trim();
        if url.is_empty() {
            return None;
        }
        Some(WebhookConfig::new(url).with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    /// Validate CRM configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidCrmTimeout);
        }
        if let Some(url) = &self.webhook_url {
            let url = url.expose_secret().trim();
            if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ValidationError::InvalidWebhookUrl);
            }
        }
        Ok(())
    }
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
