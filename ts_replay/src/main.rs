//! Headless match driver for the tennis scoring engine.
//!
//! Reads point-award commands from a script (or stdin), plays them through a
//! recorded match and prints the final score as JSON.

mod config;
mod logging;
mod replay;
mod script;

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Error};
use log::info;
use pico_args::Arguments;
use tennis_score::history::{InMemoryRecorder, MatchSession};

use crate::config::{Overrides, ReplayConfig};

const HELP: &str = "\
Replay point awards through the tennis scoring engine

USAGE:
  ts_replay [OPTIONS]

OPTIONS:
  --script       FILE    Script to replay                 [default: stdin]
  --left         NAME    Left player name                 [default: env TENNIS_LEFT_PLAYER or Player 1]
  --right        NAME    Right player name                [default: env TENNIS_RIGHT_PLAYER or Player 2]
  --fast-points  N       Points for a fast zone return    [default: env TENNIS_FAST_ZONE_POINTS or 2]
  --history-out  FILE    Write the match history as JSON

FLAGS:
  -h, --help             Print help information

SCRIPT:
  <left|right> [N]       Award N points (default 1)
  <left|right> <zone>    Award the slow (1) or fast zone value
  show                   Print the current score
  reset                  Start a new match
  Lines starting with # are comments.

ENVIRONMENT:
  RUST_LOG               Log filter (e.g. debug, tennis_score=debug)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        left_player: pargs.opt_value_from_str("--left")?,
        right_player: pargs.opt_value_from_str("--right")?,
        fast_zone_points: pargs.opt_value_from_str("--fast-points")?,
        script: pargs.opt_value_from_str::<_, PathBuf>("--script")?,
        history_out: pargs.opt_value_from_str::<_, PathBuf>("--history-out")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("unexpected arguments: {remaining:?}");
    }

    let config = ReplayConfig::from_env(overrides);
    config.validate()?;

    logging::init();

    let input = match &config.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read script from stdin")?,
    };
    let commands = script::parse_script(&input)?;
    info!("Loaded {} command(s)", commands.len());

    let mut session = MatchSession::start(
        config.left_player.clone(),
        config.right_player.clone(),
        InMemoryRecorder::new(),
    )?;

    let summary = replay::run(&mut session, &commands, &config.scoring)?;
    info!(
        "Replay finished: {} applied, {} rejected, {} match(es) won",
        summary.applied, summary.rejected, summary.matches_finished
    );

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);

    if let Some(path) = &config.history_out {
        let json = session.recorder().export_json()?;
        fs::write(path, json)
            .with_context(|| format!("failed to write history to {}", path.display()))?;
        info!("History written to {}", path.display());
    }

    Ok(())
}
