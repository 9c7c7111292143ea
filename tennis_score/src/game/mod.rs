//! Match scoring engine.
//!
//! This module provides the scoring core:
//! - Side and player identities
//! - The match state machine and its pure transition function
//! - Score snapshots for persistence and display

pub mod constants;
pub mod entities;
pub mod snapshot;
pub mod state_machine;

pub use entities::{ParseSideError, PlayerName, ScoreEvent, Side, SideScore};
pub use snapshot::ScoreSnapshot;
pub use state_machine::{MatchPhase, MatchState, ScoreError, Transition, apply_points};
