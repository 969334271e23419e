use serde::{Deserialize, Serialize};
use std::fs;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::timer::TimerConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub tick_ms: Option<u64>,
    pub flush_threshold: Option<usize>,
    pub drain_threshold: Option<usize>,
    pub export_interval_secs: Option<u64>,
}

impl Config {
    /// Load configuration from `path` (or defaults when `None`) and apply
    /// the CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(tick_ms) = overrides.tick_ms {
            self.timer.tick_ms = tick_ms;
        }
        if let Some(threshold) = overrides.flush_threshold {
            self.cache.flush_threshold = threshold;
        }
        if let Some(threshold) = overrides.drain_threshold {
            self.cache.drain_threshold = threshold;
        }
        if let Some(interval) = overrides.export_interval_secs {
            self.cache.export_interval_secs = interval;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.tick_ms == 0 {
            return Err(ConfigError::Validation(
                "timer.tick_ms must be greater than 0".to_string(),
            ));
        }
        if self.timer.wheel_slots == 0 {
            return Err(ConfigError::Validation(
                "timer.wheel_slots must be greater than 0".to_string(),
            ));
        }
        if self.cache.flush_threshold == 0 {
            return Err(ConfigError::Validation(
                "cache.flush_threshold must be greater than 0".to_string(),
            ));
        }
        if self.cache.drain_threshold == 0 {
            return Err(ConfigError::Validation(
                "cache.drain_threshold must be greater than 0".to_string(),
            ));
        }
        if self.cache.export_batch_size == 0 {
            return Err(ConfigError::Validation(
                "cache.export_batch_size must be greater than 0".to_string(),
            ));
        }
        let level = self.logging.level.to_lowercase();
        if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }
        Ok(())
    }
}
