//! Replay configuration management.
//!
//! Consolidates all environment variable reads and CLI overrides into one
//! validated configuration.

use std::path::PathBuf;

use tennis_score::{
    PlayerName,
    config::{self as scoring, ScoringConfig, parse_env_or},
};

pub const DEFAULT_LEFT_PLAYER: &str = "Player 1";
pub const DEFAULT_RIGHT_PLAYER: &str = "Player 2";

/// Complete replay configuration loaded from environment variables and CLI
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Left side player
    pub left_player: PlayerName,
    /// Right side player
    pub right_player: PlayerName,
    /// Paddle zone scoring
    pub scoring: ScoringConfig,
    /// Script to replay (stdin when absent)
    pub script: Option<PathBuf>,
    /// Where to write the match history as JSON
    pub history_out: Option<PathBuf>,
}

/// Values given on the command line, taking precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub left_player: Option<String>,
    pub right_player: Option<String>,
    pub fast_zone_points: Option<u32>,
    pub script: Option<PathBuf>,
    pub history_out: Option<PathBuf>,
}

impl ReplayConfig {
    /// Load configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `TENNIS_LEFT_PLAYER`: left player name (default: "Player 1")
    /// - `TENNIS_RIGHT_PLAYER`: right player name (default: "Player 2")
    /// - `TENNIS_FAST_ZONE_POINTS`: fast zone points (default: 2)
    pub fn from_env(overrides: Overrides) -> Self {
        let left_player = overrides.left_player.unwrap_or_else(|| {
            std::env::var("TENNIS_LEFT_PLAYER").unwrap_or_else(|_| DEFAULT_LEFT_PLAYER.to_string())
        });
        let right_player = overrides.right_player.unwrap_or_else(|| {
            std::env::var("TENNIS_RIGHT_PLAYER")
                .unwrap_or_else(|_| DEFAULT_RIGHT_PLAYER.to_string())
        });
        let fast_zone_points = overrides.fast_zone_points.unwrap_or_else(|| {
            parse_env_or(
                "TENNIS_FAST_ZONE_POINTS",
                scoring::DEFAULT_FAST_ZONE_POINTS,
            )
        });

        Self {
            left_player: PlayerName::new(&left_player),
            right_player: PlayerName::new(&right_player),
            scoring: ScoringConfig { fast_zone_points },
            script: overrides.script,
            history_out: overrides.history_out,
        }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.left_player.is_empty() {
            return Err(ConfigError::Invalid {
                var: "TENNIS_LEFT_PLAYER".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.right_player.is_empty() {
            return Err(ConfigError::Invalid {
                var: "TENNIS_RIGHT_PLAYER".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        self.scoring.validate()?;

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error(transparent)]
    Scoring(#[from] scoring::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(left: &str, right: &str, fast_zone_points: u32) -> ReplayConfig {
        ReplayConfig::from_env(Overrides {
            left_player: Some(left.to_string()),
            right_player: Some(right.to_string()),
            fast_zone_points: Some(fast_zone_points),
            ..Overrides::default()
        })
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = config("Ana", "Ben", 5);
        assert_eq!(config.left_player.as_str(), "Ana");
        assert_eq!(config.right_player.as_str(), "Ben");
        assert_eq!(config.scoring.fast_zone_points, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_name() {
        let err = config("   ", "Ben", 2).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("TENNIS_LEFT_PLAYER"));
    }

    #[test]
    fn test_config_validation_fast_points_out_of_range() {
        let err = config("Ana", "Ben", 1).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Scoring(_)));
    }
}
