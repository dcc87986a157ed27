//! Core domain types for the game.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (auto-played in single-player mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// How the game is played, fixed at creation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One human plays X; the engine answers every X move with a random O move.
    #[default]
    #[display("single")]
    Single,
    /// Both sides are played by callers.
    #[display("multi")]
    Multi,
}

impl Mode {
    /// The side the engine plays on its own, if any.
    pub fn auto_player(self) -> Option<Player> {
        match self {
            Mode::Single => Some(Player::O),
            Mode::Multi => None,
        }
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Mode::Single),
            "multi" => Ok(Mode::Multi),
            _ => Err(ModeParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// Text that does not name a game mode.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown mode {:?} (expected \"single\" or \"multi\")", input)]
pub struct ModeParseError {
    /// The rejected input.
    pub input: String,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Result of asking the model to apply a move.
///
/// Rule violations are ordinary outcomes, not errors; callers check the
/// returned status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum MoveStatus {
    /// The move was recorded and the game continues.
    Accepted,
    /// The move was not recorded: the cell was occupied or the game was over.
    Rejected,
    /// The move was recorded and ended the game.
    Terminal,
}

/// Payload of the move notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveNotice {
    /// A mark was placed at the position.
    Placed(Position),
    /// A move onto an occupied cell was attempted.
    Invalid,
}

impl MoveNotice {
    /// The placed position, or `None` for the invalid sentinel.
    pub fn position(self) -> Option<Position> {
        match self {
            MoveNotice::Placed(pos) => Some(pos),
            MoveNotice::Invalid => None,
        }
    }
}

impl std::fmt::Display for MoveNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveNotice::Placed(pos) => write!(f, "{}", pos),
            MoveNotice::Invalid => write!(f, "invalid"),
        }
    }
}
