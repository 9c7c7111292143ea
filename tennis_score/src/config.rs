//! Scoring configuration.
//!
//! Each paddle has a slow zone worth a single point and a fast zone whose
//! value is configurable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FAST_ZONE_POINTS: u32 = 2;
pub const MIN_FAST_ZONE_POINTS: u32 = 2;
pub const MAX_FAST_ZONE_POINTS: u32 = 20;

/// Paddle zone that returned the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddleZone {
    Slow,
    Fast,
}

impl std::fmt::Display for PaddleZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaddleZone::Slow => write!(f, "slow"),
            PaddleZone::Fast => write!(f, "fast"),
        }
    }
}

impl std::str::FromStr for PaddleZone {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(PaddleZone::Slow),
            "fast" => Ok(PaddleZone::Fast),
            _ => Err(ConfigError::Invalid {
                var: "zone".to_string(),
                reason: format!("unknown paddle zone {s:?}"),
            }),
        }
    }
}

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points awarded when the ball comes off a fast zone
    pub fast_zone_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fast_zone_points: DEFAULT_FAST_ZONE_POINTS,
        }
    }
}

impl ScoringConfig {
    /// Load configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `TENNIS_FAST_ZONE_POINTS`: points for the fast zone (default: 2)
    ///
    /// # Errors
    ///
    /// Returns error if the loaded value is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            fast_zone_points: parse_env_or("TENNIS_FAST_ZONE_POINTS", DEFAULT_FAST_ZONE_POINTS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FAST_ZONE_POINTS..=MAX_FAST_ZONE_POINTS).contains(&self.fast_zone_points) {
            return Err(ConfigError::Invalid {
                var: "TENNIS_FAST_ZONE_POINTS".to_string(),
                reason: format!(
                    "Must be between {MIN_FAST_ZONE_POINTS} and {MAX_FAST_ZONE_POINTS}, got {}",
                    self.fast_zone_points
                ),
            });
        }

        Ok(())
    }

    /// Points awarded for a return from `zone`
    pub fn points_for(&self, zone: PaddleZone) -> u32 {
        match zone {
            PaddleZone::Slow => 1,
            PaddleZone::Fast => self.fast_zone_points,
        }
    }
}

/// Helper to parse environment variable with default fallback
pub fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
