//! # Tennis Score
//!
//! A deterministic tennis scoring engine for a two-player paddle game.
//!
//! The engine turns "award N points to side S" events into game, set and
//! match transitions. A single award may carry several points; they are
//! banked as whole sets first and the rest cascades through the live game,
//! carrying any surplus into the next one.
//!
//! This variant keeps the scoring compact: every game won counts as one set,
//! and the first side to [`SETS_TO_WIN`] sets wins the match.
//!
//! ## Core Modules
//!
//! - [`game`]: Match state machine, entities and snapshots
//! - [`history`]: Recording boundary for match and point history
//! - [`config`]: Paddle zone scoring configuration
//!
//! ## Example
//!
//! ```
//! use tennis_score::{MatchState, Side};
//!
//! let mut game = MatchState::new("Ana", "Ben");
//! game.award_points(Side::Left, 5).unwrap();
//!
//! assert_eq!(game.sets_display(), "1-0");
//! assert_eq!(game.points_display(Side::Left), "15");
//! ```

/// Paddle zone scoring configuration.
pub mod config;

/// Scoring engine: state machine, entities and snapshots.
pub mod game;
pub use game::{
    MatchPhase, MatchState, PlayerName, ScoreError, ScoreEvent, ScoreSnapshot, Side, Transition,
    apply_points,
    constants::{self, POINTS_TO_WIN_SET, SETS_TO_WIN},
};

/// Match history recording.
pub mod history;
