//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Write journey snapshots to disk; in-memory only when disabled
    #[serde(default = "default_true")]
    pub enable_persistence: bool,

    /// Deliver leads to the CRM webhook; log only when disabled
    #[serde(default = "default_true")]
    pub enable_crm: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_persistence: true,
            enable_crm: true,
        }
    }
}

fn default_true() -> bool {
    true
}
