//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddress(String),

    #[error("Invalid public URL: {0}")]
    InvalidPublicUrl(String),

    #[error("Persistence debounce must be between 1 and 10000 ms")]
    InvalidDebounce,

    #[error("Idle journey eviction must be between 60 and 86400 seconds")]
    InvalidIdleEviction,

    #[error("CRM timeout ({crm_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    CrmTimeoutExceedsRequestTimeout { crm_secs: u64, request_secs: u64 },

    #[error("CRM webhook URL must use http or https")]
    InvalidWebhookUrl,

    #[error("CRM timeout must be between 1 and 60 seconds")]
    InvalidCrmTimeout,
}
