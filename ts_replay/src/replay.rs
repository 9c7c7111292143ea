//! Drives a recorded match from parsed script commands.

use tennis_score::{
    Side,
    config::ScoringConfig,
    history::{HistoryError, MatchRecorder, MatchSession, SessionError},
};

use crate::logging;
use crate::script::{Command, ScriptLine};

/// Totals for one replay run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
    pub matches_finished: usize,
}

/// Runs every command through `session`.
///
/// Awards the engine refuses are logged and counted; recorder failures stop
/// the replay.
pub fn run<R: MatchRecorder>(
    session: &mut MatchSession<R>,
    commands: &[ScriptLine],
    scoring: &ScoringConfig,
) -> Result<ReplaySummary, HistoryError> {
    let mut summary = ReplaySummary::default();

    for ScriptLine { line, command } in commands {
        let (side, count) = match command {
            Command::Award { side, count } => (*side, *count),
            Command::Zone { side, zone } => (*side, scoring.points_for(*zone)),
            Command::Reset => {
                session.restart()?;
                continue;
            }
            Command::Show => {
                let snapshot = session.snapshot();
                println!(
                    "{} {} - {} {}  sets {}",
                    session.state().player_name(Side::Left),
                    snapshot.left_points,
                    snapshot.right_points,
                    session.state().player_name(Side::Right),
                    snapshot.sets_display()
                );
                continue;
            }
        };

        let was_over = session.state().is_match_over();
        match session.award_points(side, count) {
            Ok(events) if events.is_empty() => {
                logging::log_rejected(*line, "match is over");
                summary.rejected += 1;
            }
            Ok(events) => {
                for event in &events {
                    log::debug!("line {line}: {event}");
                }
                summary.applied += 1;
                if !was_over && session.state().is_match_over() {
                    summary.matches_finished += 1;
                }
                logging::log_snapshot(*line, &session.snapshot());
            }
            Err(SessionError::Score(err)) => {
                logging::log_rejected(*line, &err.to_string());
                summary.rejected += 1;
            }
            Err(SessionError::History(err)) => return Err(err),
        }
    }

    Ok(summary)
}
