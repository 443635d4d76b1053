//! Host configuration parsed from environment variables.

use board::camera::ZoomLimits;
use board::consts::{MAX_ZOOM, MIN_ZOOM, SNAP_THRESHOLD};
use board::engine::EngineSettings;

pub const DEFAULT_SESSION_KEY: &str = "frosthaven-board-state";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got `{value}`")]
    NotANumber { var: &'static str, value: String },
    #[error("HEXBOARD_SNAP_THRESHOLD must be positive, got {0}")]
    NonPositiveThreshold(f64),
    #[error("zoom range is empty: min {min} must be positive and below max {max}")]
    ZoomRange { min: f64, max: f64 },
    #[error("HEXBOARD_SESSION_KEY must not be empty")]
    EmptySessionKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub session_key: String,
    pub engine: EngineSettings,
}

impl AppConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HEXBOARD_SESSION_KEY`: default `frosthaven-board-state`
    /// - `HEXBOARD_SNAP_THRESHOLD`: default 50
    /// - `HEXBOARD_MIN_ZOOM`: default 0.1
    /// - `HEXBOARD_MAX_ZOOM`: default 3.0
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading through `lookup` instead of
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_key = lookup("HEXBOARD_SESSION_KEY").unwrap_or_else(|| DEFAULT_SESSION_KEY.to_owned());
        let session_key = session_key.trim().to_owned();
        if session_key.is_empty() {
            return Err(ConfigError::EmptySessionKey);
        }

        let snap_threshold = parse_f64(&lookup, "HEXBOARD_SNAP_THRESHOLD", SNAP_THRESHOLD)?;
        if !(snap_threshold.is_finite() && snap_threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(snap_threshold));
        }

        let min = parse_f64(&lookup, "HEXBOARD_MIN_ZOOM", MIN_ZOOM)?;
        let max = parse_f64(&lookup, "HEXBOARD_MAX_ZOOM", MAX_ZOOM)?;
        if !(min > 0.0 && max.is_finite() && min < max) {
            return Err(ConfigError::ZoomRange { min, max });
        }

        Ok(Self { session_key, engine: EngineSettings { snap_threshold, zoom_limits: ZoomLimits { min, max } } })
    }
}

fn parse_f64<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::NotANumber { var, value: raw.clone() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
