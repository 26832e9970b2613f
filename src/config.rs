//! Path manager configuration, assembled once at startup.

use crate::follower::{FollowerKind, Params};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_R_MIN: f64 = 75.0;
pub const DEFAULT_UPDATE_RATE: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {key} = '{value}' - {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathManagerConfig {
    /// Minimum turn radius.
    #[serde(rename = "R_min", alias = "r_min")]
    pub r_min: f64,
    /// Publication frequency in Hz.
    pub update_rate: f64,
    pub follower: FollowerKind,
}

impl Default for PathManagerConfig {
    fn default() -> Self {
        Self {
            r_min: DEFAULT_R_MIN,
            update_rate: DEFAULT_UPDATE_RATE,
            follower: FollowerKind::default(),
        }
    }
}

impl PathManagerConfig {
    /// Loads a JSON config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.update_rate.is_finite() || self.update_rate <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "update_rate",
                value: self.update_rate.to_string(),
                reason: "must be a positive frequency",
            });
        }
        if self.update_period().is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "update_rate",
                value: self.update_rate.to_string(),
                reason: "period rounds to zero",
            });
        }
        if !self.r_min.is_finite() || self.r_min <= 0.0 || self.r_min > f64::from(f32::MAX) {
            return Err(ConfigError::InvalidValue {
                key: "R_min",
                value: self.r_min.to_string(),
                reason: "must be a positive radius",
            });
        }
        Ok(())
    }

    pub fn params(&self) -> Params {
        Params {
            r_min: self.r_min as f32,
        }
    }

    pub fn update_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.update_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PathManagerConfig::default();
        assert_eq!(config.r_min, 75.0);
        assert_eq!(config.update_rate, 10.0);
        assert_eq!(config.follower, FollowerKind::Line);
        assert_eq!(config.update_period(), Duration::from_millis(100));
        assert_eq!(config.params().r_min, 75.0);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = PathManagerConfig::from_json_str(r#"{"R_min": 120.0}"#).unwrap();
        assert_eq!(config.r_min, 120.0);
        assert_eq!(config.update_rate, 10.0);

        let config =
            PathManagerConfig::from_json_str(r#"{"update_rate": 50, "follower": "loiter"}"#)
                .unwrap();
        assert_eq!(config.update_period(), Duration::from_millis(20));
        assert_eq!(config.follower, FollowerKind::Loiter);
    }

    #[test]
    fn rejects_non_positive_rate() {
        let err = PathManagerConfig::from_json_str(r#"{"update_rate": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "update_rate",
                ..
            }
        ));
    }

    #[test]
    fn rejects_rate_with_zero_period() {
        let err = PathManagerConfig::from_json_str(r#"{"update_rate": 1e10}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "update_rate",
                ..
            }
        ));
        assert!(PathManagerConfig::from_json_str(r#"{"update_rate": 1e9}"#).is_ok());
    }

    #[test]
    fn rejects_radius_beyond_f32() {
        let err = PathManagerConfig::from_json_str(r#"{"R_min": 1e39}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "R_min", .. }));
    }

    #[test]
    fn rejects_negative_radius() {
        let err = PathManagerConfig::from_json_str(r#"{"R_min": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "R_min", .. }));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = PathManagerConfig::from_json_str(r#"{"rate": 5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_default() {
        let config =
            PathManagerConfig::load_from(Path::new("/nonexistent/path_manager.json")).unwrap();
        assert_eq!(config, PathManagerConfig::default());
    }
}
