//! Match history error types.

use thiserror::Error;

use super::models::MatchId;

/// Match history errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Match not found
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    /// Winner written twice for the same match
    #[error("Winner already recorded for match {0}")]
    WinnerAlreadyRecorded(MatchId),

    /// Export failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for match history operations
pub type HistoryResult<T> = Result<T, HistoryError>;
