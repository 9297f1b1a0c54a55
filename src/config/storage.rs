//! Journey storage configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Journey snapshot storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per journey
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Quiet period before a changed journey is written, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Live journeys untouched this long are dropped from memory, in seconds
    #[serde(default = "default_idle_eviction_secs")]
    pub idle_eviction_secs: u64,
}

impl StorageConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn idle_eviction(&self) -> Duration {
        Duration::from_secs(self.idle_eviction_secs)
    }

    /// How often the idle sweep runs.
    pub fn sweep_interval(&self) -> Duration {
        self.idle_eviction().min(MAX_SWEEP_INTERVAL)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.debounce_ms == 0 || self.debounce_ms > 10_000 {
            return Err(ValidationError::InvalidDebounce);
        }
        if !(60..=86_400).contains(&self.idle_eviction_secs) {
            return Err(ValidationError::InvalidIdleEviction);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            debounce_ms: default_debounce_ms(),
            idle_eviction_secs: default_idle_eviction_secs(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/journeys")
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_idle_eviction_secs() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debounce_bounds() {
        for debounce_ms in [0, 10_001] {
            let config = StorageConfig {
                debounce_ms,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidDebounce));
        }

        let config = StorageConfig {
            debounce_ms: 10_000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_idle_eviction_bounds() {
        for idle_eviction_secs in [0, 59, 86_401] {
            let config = StorageConfig {
                idle_eviction_secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidIdleEviction));
        }
    }

    #[test]
    fn test_sweep_interval_is_capped() {
        let config = StorageConfig::default();
        assert_eq!(config.idle_eviction(), Duration::from_secs(1800));
        assert_eq!(config.sweep_interval(), Duration::from_secs(60));
    }
}
