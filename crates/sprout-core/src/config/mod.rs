//! Engine configuration: compiled defaults, optional TOML file, `SPROUT_*`
//! environment overrides.

pub mod defaults;
mod observability_config;
mod schedule_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use schedule_config::ScheduleConfig;

use crate::constants::FULL_SATURATION;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SPROUT_*`)
/// 2. Config file passed to [`SproutConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SproutConfig {
    pub schedule: ScheduleConfig,
    pub observability: ObservabilityConfig,
}

impl SproutConfig {
    /// Load configuration from an optional TOML file, then apply env overrides.
    ///
    /// A `path` that does not exist is an error; pass `None` to use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let target = self.schedule.target_check_wetness;
        if !(target > 0.0 && target < FULL_SATURATION) {
            return Err(ConfigError::ValidationFailed {
                field: "schedule.target_check_wetness".to_string(),
                message: "must be strictly between 0 and 10".to_string(),
            });
        }
        if self.schedule.fallback_interval_days == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "schedule.fallback_interval_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if f64::from(self.schedule.auto_water_at_or_below) > FULL_SATURATION {
            return Err(ConfigError::ValidationFailed {
                field: "schedule.auto_water_at_or_below".to_string(),
                message: "must be between 0 and 10".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the previous value kept.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SPROUT_TARGET_CHECK_WETNESS") {
            if let Ok(v) = val.parse::<f64>() {
                self.schedule.target_check_wetness = v;
            }
        }
        if let Ok(val) = std::env::var("SPROUT_FALLBACK_INTERVAL_DAYS") {
            if let Ok(v) = val.parse::<u32>() {
                self.schedule.fallback_interval_days = v;
            }
        }
        if let Ok(val) = std::env::var("SPROUT_AUTO_WATER_AT_OR_BELOW") {
            if let Ok(v) = val.parse::<u8>() {
                self.schedule.auto_water_at_or_below = v;
            }
        }
        if let Ok(val) = std::env::var("SPROUT_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("SPROUT_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json = v;
            }
        }
    }
}
