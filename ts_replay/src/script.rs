//! Replay script parsing.
//!
//! One command per line; `#` starts a comment and blank lines are skipped.
//!
//! ```text
//! left 1        # explicit award
//! r fast        # award the fast zone value
//! show
//! reset
//! ```

use std::str::FromStr;

use tennis_score::{Side, config::PaddleZone};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Award an explicit number of points
    Award { side: Side, count: u32 },
    /// Award the value of a paddle zone
    Zone { side: Side, zone: PaddleZone },
    /// Start a new match with the same players
    Reset,
    /// Print the current score
    Show,
}

/// A command and the 1-based line it came from
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

#[derive(Debug, Eq, Error, PartialEq)]
pub enum ParseCommandError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("unexpected argument {0:?}")]
    InvalidArgument(String),
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("line {line}: {error}")]
pub struct ScriptError {
    pub line: usize,
    pub error: ParseCommandError,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().unwrap_or_default();

        let command = match head.to_ascii_lowercase().as_str() {
            "reset" => Self::Reset,
            "show" => Self::Show,
            _ => {
                let side: Side = head
                    .parse()
                    .map_err(|_| ParseCommandError::UnknownCommand(head.to_string()))?;
                let amount = words.next().unwrap_or("1");
                match amount.parse::<u32>() {
                    Ok(count) => Self::Award { side, count },
                    Err(_) => {
                        let zone = amount
                            .parse()
                            .map_err(|_| ParseCommandError::InvalidArgument(amount.to_string()))?;
                        Self::Zone { side, zone }
                    }
                }
            }
        };

        if let Some(extra) = words.next() {
            return Err(ParseCommandError::InvalidArgument(extra.to_string()));
        }
        Ok(command)
    }
}

/// Parses a whole script
///
/// # Errors
///
/// Returns the first malformed line
pub fn parse_script(input: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        let command = text
            .parse::<Command>()
            .map_err(|error| ScriptError { line, error })?;
        lines.push(ScriptLine { line, command });
    }

    Ok(lines)
}
