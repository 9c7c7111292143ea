//! Match scoring state machine.
//!
//! A match moves between two observable phases: [`MatchPhase::InGame`] and
//! [`MatchPhase::MatchOver`]. Each won game banks one set for the winner and
//! the live game is reset in the same call, so a concluded game is only
//! visible through the terminal `game_over` flag that accompanies a match win.
//!
//! Points are applied through [`apply_points`], a pure transition from one
//! [`MatchState`] to the next. [`MatchState::award_points`] wraps it for
//! callers that keep a single mutable state around.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::constants::{FORTY, POINTS_TO_WIN_SET, SETS_TO_WIN};
use super::entities::{PlayerName, ScoreEvent, Side, SideScore};

/// Errors for point awards that can't be applied.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ScoreError {
    #[error("can't award zero points")]
    ZeroPoints,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MatchPhase {
    InGame,
    MatchOver,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::InGame => "in game",
            Self::MatchOver => "match over",
        };
        write!(f, "{repr}")
    }
}

/// Result of applying one award: the next state and what happened on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: MatchState,
    pub events: Vec<ScoreEvent>,
}

impl Transition {
    /// True when the award had no effect, i.e. the match was already over.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Complete scoring state of one match between two named players.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchState {
    left_player: PlayerName,
    right_player: PlayerName,
    left: SideScore,
    right: SideScore,
    game_over: bool,
    match_over: bool,
    winner: Option<Side>,
}

impl MatchState {
    pub fn new(left_player: impl Into<PlayerName>, right_player: impl Into<PlayerName>) -> Self {
        Self {
            left_player: left_player.into(),
            right_player: right_player.into(),
            left: SideScore::default(),
            right: SideScore::default(),
            game_over: false,
            match_over: false,
            winner: None,
        }
    }

    pub fn score(&self, side: Side) -> &SideScore {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn score_mut(&mut self, side: Side) -> &mut SideScore {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn player_name(&self, side: Side) -> &PlayerName {
        match side {
            Side::Left => &self.left_player,
            Side::Right => &self.right_player,
        }
    }

    /// Point index of `side` in the live game.
    pub fn points(&self, side: Side) -> u8 {
        self.score(side).points
    }

    pub fn has_advantage(&self, side: Side) -> bool {
        self.score(side).advantage
    }

    pub fn sets(&self, side: Side) -> u32 {
        self.score(side).sets
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_match_over(&self) -> bool {
        self.match_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Name of the match winner. `None` until the match is over.
    pub fn winner_name(&self) -> Option<&PlayerName> {
        self.winner.map(|side| self.player_name(side))
    }

    pub fn phase(&self) -> MatchPhase {
        if self.match_over {
            MatchPhase::MatchOver
        } else {
            MatchPhase::InGame
        }
    }

    /// Tennis label for the live game: `"0"`, `"15"`, `"30"`, `"40"` or `"AV"`.
    pub fn points_display(&self, side: Side) -> &'static str {
        self.score(side).label()
    }

    /// Set tally as `"{left}-{right}"`.
    pub fn sets_display(&self) -> String {
        format!("{}-{}", self.left.sets, self.right.sets)
    }

    /// Number of consecutive points `side` still needs to win the live game.
    ///
    /// Returns 0 once the match is over.
    pub fn points_to_win_game(&self, side: Side) -> u32 {
        if self.match_over {
            return 0;
        }

        let own = self.score(side);
        let other = self.score(side.opponent());
        let to_forty = u32::from(FORTY - own.points.min(FORTY));

        if other.advantage {
            // Back to deuce, take advantage, then convert.
            3
        } else if own.advantage {
            1
        } else if other.points >= FORTY {
            // Reaching 40 only gets to deuce: one more for advantage, one to win.
            to_forty + 2
        } else {
            to_forty + 1
        }
    }

    /// Applies `count` points to `side` in place.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::ZeroPoints`] when `count` is 0. The state is left
    /// untouched in that case.
    pub fn award_points(&mut self, side: Side, count: u32) -> Result<Vec<ScoreEvent>, ScoreError> {
        let transition = apply_points(self, side, count)?;
        *self = transition.state;
        Ok(transition.events)
    }

    /// Clears every counter, flag and the winner. Player names are kept.
    pub fn reset_match(&mut self) {
        self.left = SideScore::default();
        self.right = SideScore::default();
        self.game_over = false;
        self.match_over = false;
        self.winner = None;
        debug!(
            "match reset for {} vs {}",
            self.left_player, self.right_player
        );
    }

    fn reset_game(&mut self) {
        for side in Side::BOTH {
            let score = self.score_mut(side);
            score.points = 0;
            score.advantage = false;
        }
        self.game_over = false;
    }

    /// Resolves a single point for `side` that does not win the game.
    /// Game-winning points go through [`MatchState::win_game`].
    fn score_point(&mut self, side: Side, events: &mut Vec<ScoreEvent>) {
        let name = self.player_name(side).clone();
        let opponent = side.opponent();

        if self.score(opponent).advantage {
            self.score_mut(opponent).advantage = false;
            events.push(ScoreEvent::DeuceRestored(name));
        } else if self.points(side) >= FORTY && self.points(opponent) >= FORTY {
            self.score_mut(side).advantage = true;
            events.push(ScoreEvent::AdvantageGained(name));
        } else {
            self.score_mut(side).points += 1;
            events.push(ScoreEvent::PointWon(name));
        }
    }

    fn win_game(&mut self, side: Side, events: &mut Vec<ScoreEvent>) {
        let name = self.player_name(side).clone();
        let score = self.score_mut(side);
        score.sets += 1;
        let sets = score.sets;
        self.game_over = true;

        info!("{name} won the game, {}", self.sets_display());
        events.push(ScoreEvent::GameWon {
            winner: name.clone(),
            sets,
        });

        if sets >= SETS_TO_WIN {
            self.match_over = true;
            self.winner = Some(side);
            info!("{name} won the match {}", self.sets_display());
            events.push(ScoreEvent::MatchWon(name));
        } else {
            self.reset_game();
        }
    }
}

/// Applies `count` points for `side` to `state` and returns the next state.
///
/// The award is consumed in units of progress until it runs out or the match
/// ends:
/// - while at least [`POINTS_TO_WIN_SET`] points remain, one game (and so one
///   set) is granted outright;
/// - if the rest covers what `side` needs to close the live game, the game is
///   won and the surplus carries into the next, freshly reset game;
/// - otherwise the rest is applied one point at a time.
///
/// Points left over when the match ends are discarded. Awards after the match
/// is over produce an unchanged state and no events.
///
/// # Errors
///
/// Returns [`ScoreError::ZeroPoints`] when `count` is 0.
pub fn apply_points(state: &MatchState, side: Side, count: u32) -> Result<Transition, ScoreError> {
    if count == 0 {
        warn!("rejected empty award for {side}");
        return Err(ScoreError::ZeroPoints);
    }

    let mut next = state.clone();
    let mut events = Vec::new();

    if next.match_over {
        warn!("ignoring {count} point(s) for {side}, match is over");
        return Ok(Transition {
            state: next,
            events,
        });
    }

    let mut remaining = count;
    while remaining > 0 && !next.match_over {
        if remaining >= POINTS_TO_WIN_SET {
            next.win_game(side, &mut events);
            remaining -= POINTS_TO_WIN_SET;
            continue;
        }

        let needed = next.points_to_win_game(side);
        if remaining >= needed {
            // Walk up to game point so a match-ending win keeps the labels
            // single-point play would show.
            for _ in 1..needed {
                next.score_point(side, &mut events);
            }
            next.win_game(side, &mut events);
            remaining -= needed;
        } else {
            next.score_point(side, &mut events);
            remaining -= 1;
        }
    }

    if remaining > 0 {
        debug!("discarded {remaining} point(s) for {side} after match end");
    }
    debug!(
        "{side} +{count}: {}-{} sets {}",
        next.points_display(Side::Left),
        next.points_display(Side::Right),
        next.sets_display()
    );

    Ok(Transition {
        state: next,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_match() -> MatchState {
        MatchState::new("A", "B")
    }

    fn deuce() -> MatchState {
        let mut state = new_match();
        state.left.points = FORTY;
        state.right.points = FORTY;
        state
    }

    fn award(state: &mut MatchState, side: Side, count: u32) {
        state.award_points(side, count).unwrap();
    }

    #[test]
    fn test_initial_state() {
        let state = new_match();
        assert_eq!(state.phase(), MatchPhase::InGame);
        assert_eq!(state.points_display(Side::Left), "0");
        assert_eq!(state.points_display(Side::Right), "0");
        assert_eq!(state.sets_display(), "0-0");
        assert!(!state.is_game_over());
        assert!(!state.is_match_over());
        assert!(state.winner_name().is_none());
    }

    #[test]
    fn test_single_point_progression() {
        let mut state = new_match();
        let mut labels = vec![state.points_display(Side::Left)];
        for _ in 0..3 {
            award(&mut state, Side::Left, 1);
            labels.push(state.points_display(Side::Left));
        }
        assert_eq!(labels, ["0", "15", "30", "40"]);
        assert_eq!(state.sets(Side::Left), 0);

        award(&mut state, Side::Left, 1);
        assert_eq!(state.sets(Side::Left), 1);
        assert_eq!(state.points(Side::Left), 0);
        assert_eq!(state.points(Side::Right), 0);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_deuce_advantage_cycle() {
        let mut state = deuce();

        award(&mut state, Side::Left, 1);
        assert!(state.has_advantage(Side::Left));
        assert_eq!(state.points_display(Side::Left), "AV");
        assert_eq!(state.points_display(Side::Right), "40");

        award(&mut state, Side::Right, 1);
        assert!(!state.has_advantage(Side::Left));
        assert!(!state.has_advantage(Side::Right));
        assert_eq!(state.points(Side::Left), FORTY);
        assert_eq!(state.points(Side::Right), FORTY);

        award(&mut state, Side::Left, 1);
        assert!(state.has_advantage(Side::Left));

        award(&mut state, Side::Left, 1);
        assert_eq!(state.sets(Side::Left), 1);
        assert_eq!(state.points(Side::Left), 0);
        assert!(!state.has_advantage(Side::Left));
    }

    #[test]
    fn test_deuce_oscillation_never_sets_both_advantages() {
        let mut state = deuce();
        for i in 0..20 {
            let side = if i % 2 == 0 { Side::Left } else { Side::Right };
            award(&mut state, side, 1);
            assert!(!(state.has_advantage(Side::Left) && state.has_advantage(Side::Right)));
            assert_eq!(state.sets_display(), "0-0");
        }
    }

    #[test]
    fn test_bulk_four_points_wins_one_set() {
        let mut state = new_match();
        let events = state.award_points(Side::Left, 4).unwrap();
        assert_eq!(state.sets(Side::Left), 1);
        assert_eq!(state.points(Side::Left), 0);
        assert_eq!(state.points(Side::Right), 0);
        assert_eq!(
            events,
            vec![ScoreEvent::GameWon {
                winner: PlayerName::new("A"),
                sets: 1
            }]
        );
    }

    #[test]
    fn test_bulk_five_points_carries_one_point() {
        let mut state = new_match();
        award(&mut state, Side::Right, 5);
        assert_eq!(state.sets(Side::Right), 1);
        assert_eq!(state.points_display(Side::Right), "15");
        assert_eq!(state.points_display(Side::Left), "0");
    }

    #[test]
    fn test_bulk_remainder_closes_live_game() {
        let mut state = new_match();
        award(&mut state, Side::Left, 1);
        award(&mut state, Side::Left, 1);
        // 30-0 needs two more; the third point opens the next game.
        award(&mut state, Side::Left, 3);
        assert_eq!(state.sets(Side::Left), 1);
        assert_eq!(state.points_display(Side::Left), "15");
    }

    #[test]
    fn test_bulk_remainder_short_of_game() {
        let mut state = new_match();
        award(&mut state, Side::Right, 3);
        award(&mut state, Side::Left, 3);
        assert_eq!(state.points(Side::Left), FORTY);
        assert_eq!(state.points(Side::Right), FORTY);
        assert_eq!(state.sets_display(), "0-0");
    }

    #[test]
    fn test_bulk_set_grant_from_mid_game_resets_game() {
        let mut state = new_match();
        award(&mut state, Side::Left, 1);
        award(&mut state, Side::Right, 1);
        award(&mut state, Side::Left, 4);
        assert_eq!(state.sets_display(), "1-0");
        assert_eq!(state.points(Side::Left), 0);
        assert_eq!(state.points(Side::Right), 0);
    }

    #[test]
    fn test_bulk_award_ends_match() {
        let mut state = new_match();
        award(&mut state, Side::Left, 4);
        assert_eq!(state.sets(Side::Left), 1);

        let events = state.award_points(Side::Left, 4).unwrap();
        assert!(state.is_match_over());
        assert!(state.is_game_over());
        assert_eq!(state.phase(), MatchPhase::MatchOver);
        assert_eq!(state.sets(Side::Left), 2);
        assert_eq!(state.winner(), Some(Side::Left));
        assert_eq!(state.winner_name().map(PlayerName::as_str), Some("A"));
        assert_eq!(events.last(), Some(&ScoreEvent::MatchWon(PlayerName::new("A"))));
    }

    #[test]
    fn test_leftover_discarded_at_match_end() {
        let mut state = new_match();
        award(&mut state, Side::Right, 11);
        assert!(state.is_match_over());
        assert_eq!(state.sets(Side::Right), 2);
        assert_eq!(state.sets(Side::Left), 0);
        assert_eq!(state.winner(), Some(Side::Right));
    }

    #[test]
    fn test_award_after_match_over_is_noop() {
        let mut state = new_match();
        award(&mut state, Side::Left, 8);
        let before = state.clone();

        let transition = apply_points(&state, Side::Right, 3).unwrap();
        assert!(transition.is_noop());
        assert_eq!(transition.state, before);

        award(&mut state, Side::Left, 1);
        assert_eq!(state, before);
    }

    #[test]
    fn test_zero_points_rejected() {
        let mut state = new_match();
        award(&mut state, Side::Left, 2);
        let before = state.clone();
        assert_eq!(state.award_points(Side::Left, 0), Err(ScoreError::ZeroPoints));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_points_leaves_input_untouched() {
        let state = new_match();
        let transition = apply_points(&state, Side::Left, 2).unwrap();
        assert_eq!(state, new_match());
        assert_eq!(transition.state.points_display(Side::Left), "30");
        assert_eq!(transition.events.len(), 2);
    }

    #[test]
    fn test_points_to_win_game() {
        let mut state = new_match();
        assert_eq!(state.points_to_win_game(Side::Left), 4);

        state.right.points = FORTY;
        assert_eq!(state.points_to_win_game(Side::Left), 5);
        assert_eq!(state.points_to_win_game(Side::Right), 1);

        state.left.points = FORTY;
        assert_eq!(state.points_to_win_game(Side::Left), 2);

        state.right.advantage = true;
        assert_eq!(state.points_to_win_game(Side::Left), 3);
        assert_eq!(state.points_to_win_game(Side::Right), 1);
    }

    #[test]
    fn test_reset_match_restores_initial_state() {
        let mut state = new_match();
        award(&mut state, Side::Left, 6);
        award(&mut state, Side::Right, 8);
        assert!(state.is_match_over());
        assert_eq!(state.winner(), Some(Side::Right));

        state.reset_match();
        assert_eq!(state, new_match());
        assert_eq!(state.player_name(Side::Left).as_str(), "A");
        assert_eq!(state.player_name(Side::Right).as_str(), "B");
    }
}
