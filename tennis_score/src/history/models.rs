//! Match history data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match ID type
pub type MatchId = i64;

/// Score of both sides recorded after a scoring event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Match this point belongs to
    pub match_id: MatchId,
    /// Left side label, e.g. `"40 (1)"`
    pub left_label: String,
    /// Right side label
    pub right_label: String,
    /// Recorded at timestamp
    pub recorded_at: DateTime<Utc>,
}

/// A played (or running) match and its point-by-point progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    /// Match ID
    pub match_id: MatchId,
    pub left_player_name: String,
    pub right_player_name: String,
    /// Winner (None while the match is running)
    pub winner_name: Option<String>,
    /// Match start timestamp
    pub match_date: DateTime<Utc>,
    /// Recorded points, oldest first
    pub points: Vec<PointRecord>,
}

impl MatchHistory {
    /// Progression of the score as `"left-right"` pairs separated by `", "`
    pub fn score_progression(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("{}-{}", point.left_label, point.right_label))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Latest recorded labels, if any
    pub fn final_score(&self) -> Option<(&str, &str)> {
        self.points
            .last()
            .map(|point| (point.left_label.as_str(), point.right_label.as_str()))
    }

    pub fn is_finished(&self) -> bool {
        self.winner_name.is_some()
    }
}
