//! Draw detection logic.

use super::super::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
