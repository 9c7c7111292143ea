//! Read-only view of a match for persistence and display collaborators.

use serde::{Deserialize, Serialize};

use super::entities::Side;
use super::state_machine::MatchState;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScoreSnapshot {
    pub left_points: String,
    pub right_points: String,
    pub left_sets: u32,
    pub right_sets: u32,
    pub match_over: bool,
    pub winner_name: Option<String>,
}

impl ScoreSnapshot {
    /// Labels persisted with each point, formatted `"{points} ({sets})"`.
    pub fn progression_labels(&self) -> (String, String) {
        (
            format!("{} ({})", self.left_points, self.left_sets),
            format!("{} ({})", self.right_points, self.right_sets),
        )
    }

    pub fn sets_display(&self) -> String {
        format!("{}-{}", self.left_sets, self.right_sets)
    }
}

impl MatchState {
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            left_points: self.points_display(Side::Left).to_string(),
            right_points: self.points_display(Side::Right).to_string(),
            left_sets: self.sets(Side::Left),
            right_sets: self.sets(Side::Right),
            match_over: self.is_match_over(),
            winner_name: self.winner_name().map(ToString::to_string),
        }
    }
}

impl From<&MatchState> for ScoreSnapshot {
    fn from(value: &MatchState) -> Self {
        value.snapshot()
    }
}
