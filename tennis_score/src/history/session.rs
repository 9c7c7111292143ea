//! A match being played and recorded.

use log::{info, warn};
use thiserror::Error;

use super::errors::HistoryError;
use super::models::MatchId;
use super::recorder::MatchRecorder;
use crate::game::{MatchState, PlayerName, ScoreError, ScoreEvent, ScoreSnapshot, Side};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Couples one [`MatchState`] with the recorder that stores its history.
///
/// Every award that changes the score writes a point record. Once the match
/// is over the winner and a final point record are written; if that write
/// fails it is retried by the next call.
#[derive(Debug)]
pub struct MatchSession<R> {
    state: MatchState,
    recorder: R,
    match_id: MatchId,
    winner_recorded: bool,
}

impl<R: MatchRecorder> MatchSession<R> {
    /// Starts recording a new match between two players.
    pub fn start(
        left_player: impl Into<PlayerName>,
        right_player: impl Into<PlayerName>,
        mut recorder: R,
    ) -> Result<Self, HistoryError> {
        let state = MatchState::new(left_player, right_player);
        let match_id = recorder.start_match(
            state.player_name(Side::Left).as_str(),
            state.player_name(Side::Right).as_str(),
        )?;
        info!(
            "Match {match_id} started: {} vs {}",
            state.player_name(Side::Left),
            state.player_name(Side::Right)
        );

        Ok(Self {
            state,
            recorder,
            match_id,
            winner_recorded: false,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        self.state.snapshot()
    }

    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    pub fn into_recorder(self) -> R {
        self.recorder
    }

    /// Applies an award and records the resulting score.
    ///
    /// The engine state is updated before anything is written, so a recorder
    /// failure leaves the score correct but the history incomplete. A failed
    /// point write does not stop the winner from being written.
    pub fn award_points(&mut self, side: Side, count: u32) -> Result<Vec<ScoreEvent>, SessionError> {
        let events = self.state.award_points(side, count)?;
        let recorded = if events.is_empty() {
            Ok(())
        } else {
            self.record_current_score()
        };

        self.flush()?;
        recorded?;
        Ok(events)
    }

    /// Writes the winner and the final score once the match is over.
    ///
    /// Does nothing while the match is live or after the winner was written.
    pub fn flush(&mut self) -> Result<(), HistoryError> {
        if self.winner_recorded || !self.state.is_match_over() {
            return Ok(());
        }

        match self.state.winner_name() {
            Some(winner) => {
                self.recorder
                    .record_winner(self.match_id, winner.as_str())?;
                info!("Match {} won by {winner}", self.match_id);
            }
            None => warn!("Match {} ended without a winner", self.match_id),
        }
        self.winner_recorded = true;
        self.record_current_score()
    }

    pub fn is_winner_recorded(&self) -> bool {
        self.winner_recorded
    }

    /// Resets the score and starts recording a new match with the same players.
    ///
    /// A winner still pending from the previous match is written first.
    pub fn restart(&mut self) -> Result<MatchId, HistoryError> {
        self.flush()?;
        self.state.reset_match();
        self.match_id = self.recorder.start_match(
            self.state.player_name(Side::Left).as_str(),
            self.state.player_name(Side::Right).as_str(),
        )?;
        self.winner_recorded = false;
        info!("Match restarted as {}", self.match_id);
        Ok(self.match_id)
    }

    fn record_current_score(&mut self) -> Result<(), HistoryError> {
        let (left, right) = self.state.snapshot().progression_labels();
        self.recorder.record_point(self.match_id, &left, &right)
    }
}
