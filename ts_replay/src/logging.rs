//! Structured logging configuration.
//!
//! Library code logs through the `log` facade; those records are forwarded
//! into the `tracing` subscriber installed here.

use tennis_score::ScoreSnapshot;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the RUST_LOG env var
/// (default: `info`). Output goes to stderr so stdout stays machine-readable.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Structured logging initialized");
}

/// Log the score after a script command
///
/// # Arguments
///
/// * `line` - Script line number of the command
/// * `snapshot` - Score after the command
pub fn log_snapshot(line: usize, snapshot: &ScoreSnapshot) {
    tracing::info!(
        line = line,
        left = %snapshot.left_points,
        right = %snapshot.right_points,
        sets = %snapshot.sets_display(),
        match_over = snapshot.match_over,
        "Score updated"
    );
}

/// Log a command the engine refused
pub fn log_rejected(line: usize, reason: &str) {
    tracing::warn!(line = line, reason = reason, "Command rejected");
}
