//! Match history recording.
//!
//! The scoring engine performs no I/O. This module is the boundary towards
//! storage:
//! - Point-by-point score progression per match
//! - Final winner per match
//! - History listing, newest first
//!
//! ## Example
//!
//! ```
//! use tennis_score::Side;
//! use tennis_score::history::{InMemoryRecorder, MatchRecorder, MatchSession};
//!
//! let mut session = MatchSession::start("Ana", "Ben", InMemoryRecorder::new()).unwrap();
//! session.award_points(Side::Left, 5).unwrap();
//!
//! let history = session.recorder().history().unwrap();
//! assert_eq!(history[0].score_progression(), "0-0, 15 (1)-0 (0)");
//! ```

pub mod errors;
pub mod models;
pub mod recorder;
pub mod session;

pub use errors::{HistoryError, HistoryResult};
pub use models::{MatchHistory, MatchId, PointRecord};
pub use recorder::{InMemoryRecorder, MatchRecorder};
pub use session::{MatchSession, SessionError};
