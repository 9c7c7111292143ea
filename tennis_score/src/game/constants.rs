//! Scoring constants shared by the engine, snapshots and configuration.

/// Number of sets a side needs to win the match.
pub const SETS_TO_WIN: u32 = 2;

/// Number of points in a bulk award that are converted straight into one
/// set win before any leftover is applied to the live game.
pub const POINTS_TO_WIN_SET: u32 = 4;

/// Point index of "40". A side at this index wins the game on its next
/// point unless the opponent is also at 40.
pub const FORTY: u8 = 3;

/// Display labels indexed by point index.
pub const POINT_LABELS: [&str; 4] = ["0", "15", "30", "40"];

/// Label shown for the side holding advantage.
pub const ADVANTAGE_LABEL: &str = "AV";

/// Player names longer than this are truncated.
pub const MAX_PLAYER_NAME_LENGTH: usize = 32;
