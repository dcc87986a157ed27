//! Tic-tac-toe game model.
//!
//! A [`GameModel`] owns the board, the player to move and the game status.
//! Moves go through [`GameModel::apply_move`], which enforces the rules,
//! detects wins and draws, and announces every change on three notification
//! subjects. In [`Mode::Single`] the model answers each X move with a
//! uniformly random O move.
//!
//! # Example
//!
//! ```
//! use xo_game::{GameModel, Mode, MoveStatus, Player, Position};
//!
//! let mut game = GameModel::new(Mode::Multi);
//! assert_eq!(game.apply_move(Position::B2), MoveStatus::Accepted);
//! assert_eq!(game.current_player(), Player::O);
//! assert_eq!(game.apply_move(Position::B2), MoveStatus::Rejected);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod events;
pub mod invariants;
mod model;
mod position;
pub mod rules;
mod state;
mod types;

pub use board::Board;
pub use events::{GameEvent, Subject, SubscriptionId};
pub use model::GameModel;
pub use position::{Position, PositionParseError};
pub use state::GameState;
pub use types::{GameStatus, Mode, ModeParseError, MoveNotice, MoveStatus, Player};
