use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::constants;

/// One of the two ends of the court.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{repr}")
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("unknown side {0:?}, expected left or right")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Display name of a player. Surrounding whitespace is trimmed, inner
/// whitespace becomes `_` and the name is capped at
/// [`constants::MAX_PLAYER_NAME_LENGTH`] characters.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: &str) -> Self {
        let name: String = s
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .take(constants::MAX_PLAYER_NAME_LENGTH)
            .collect();
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for PlayerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<&str> for PlayerName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlayerName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

/// Per-side progress within the match.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SideScore {
    /// Index into [`constants::POINT_LABELS`].
    pub points: u8,
    pub advantage: bool,
    pub sets: u32,
}

impl SideScore {
    pub fn label(&self) -> &'static str {
        if self.advantage {
            constants::ADVANTAGE_LABEL
        } else {
            let idx = usize::from(self.points).min(constants::POINT_LABELS.len() - 1);
            constants::POINT_LABELS[idx]
        }
    }
}

/// Transitions produced while points are applied, in the order they happen.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ScoreEvent {
    /// The side moved up one point index.
    PointWon(PlayerName),
    /// The side took advantage from deuce.
    AdvantageGained(PlayerName),
    /// The side scored against the opponent's advantage.
    DeuceRestored(PlayerName),
    /// The side won a game and banked one set.
    GameWon { winner: PlayerName, sets: u32 },
    MatchWon(PlayerName),
}

impl fmt::Display for ScoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::PointWon(name) => format!("point to {name}"),
            Self::AdvantageGained(name) => format!("advantage {name}"),
            Self::DeuceRestored(name) => format!("{name} brings it back to deuce"),
            Self::GameWon { winner, sets } => format!("game {winner} ({sets} sets)"),
            Self::MatchWon(name) => format!("{name} won the match"),
        };
        write!(f, "{repr}")
    }
}
