//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The model calls
//! [`evaluate`] after every placed mark.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, completes_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// A completed line takes precedence over a full board, so a mark that
/// both fills the board and completes a line is a win.
#[instrument(skip(board), fields(marks = board.len()))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
