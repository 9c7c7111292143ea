//! Recorder trait for match history storage, plus an in-memory implementation.

use chrono::Utc;
use log::debug;

use super::errors::{HistoryError, HistoryResult};
use super::models::{MatchHistory, MatchId, PointRecord};

/// Storage for match history
pub trait MatchRecorder {
    /// Register a new match and its initial `"0"`/`"0"` point
    fn start_match(&mut self, left_player: &str, right_player: &str) -> HistoryResult<MatchId>;

    /// Append a point record to a match
    fn record_point(
        &mut self,
        match_id: MatchId,
        left_label: &str,
        right_label: &str,
    ) -> HistoryResult<()>;

    /// Set the winner of a match
    fn record_winner(&mut self, match_id: MatchId, winner: &str) -> HistoryResult<()>;

    /// All recorded matches, newest first
    fn history(&self) -> HistoryResult<Vec<MatchHistory>>;
}

/// Vec-backed recorder. Match IDs are sequential and start at 1.
#[derive(Debug, Default)]
pub struct InMemoryRecorder {
    matches: Vec<MatchHistory>,
}

impl InMemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, match_id: MatchId) -> Option<&MatchHistory> {
        self.matches.iter().find(|m| m.match_id == match_id)
    }

    fn get_mut(&mut self, match_id: MatchId) -> HistoryResult<&mut MatchHistory> {
        self.matches
            .iter_mut()
            .find(|m| m.match_id == match_id)
            .ok_or(HistoryError::MatchNotFound(match_id))
    }

    /// Full history as pretty-printed JSON, newest first
    pub fn export_json(&self) -> HistoryResult<String> {
        Ok(serde_json::to_string_pretty(&self.history()?)?)
    }
}

impl MatchRecorder for InMemoryRecorder {
    fn start_match(&mut self, left_player: &str, right_player: &str) -> HistoryResult<MatchId> {
        let match_id = self.matches.last().map_or(1, |m| m.match_id + 1);
        let now = Utc::now();

        self.matches.push(MatchHistory {
            match_id,
            left_player_name: left_player.to_string(),
            right_player_name: right_player.to_string(),
            winner_name: None,
            match_date: now,
            points: vec![PointRecord {
                match_id,
                left_label: "0".to_string(),
                right_label: "0".to_string(),
                recorded_at: now,
            }],
        });

        debug!("Started match {match_id}: {left_player} vs {right_player}");
        Ok(match_id)
    }

    fn record_point(
        &mut self,
        match_id: MatchId,
        left_label: &str,
        right_label: &str,
    ) -> HistoryResult<()> {
        let history = self.get_mut(match_id)?;
        history.points.push(PointRecord {
            match_id,
            left_label: left_label.to_string(),
            right_label: right_label.to_string(),
            recorded_at: Utc::now(),
        });
        Ok(())
    }

    fn record_winner(&mut self, match_id: MatchId, winner: &str) -> HistoryResult<()> {
        let history = self.get_mut(match_id)?;
        if history.winner_name.is_some() {
            return Err(HistoryError::WinnerAlreadyRecorded(match_id));
        }
        history.winner_name = Some(winner.to_string());
        Ok(())
    }

    fn history(&self) -> HistoryResult<Vec<MatchHistory>> {
        let mut matches = self.matches.clone();
        // Ids are sequential; wall-clock dates can step backwards.
        matches.sort_by(|a, b| b.match_id.cmp(&a.match_id));
        Ok(matches)
    }
}
