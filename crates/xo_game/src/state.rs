//! Authoritative game state owned by the model.

use super::board::Board;
use super::position::Position;
use super::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Places the current player's mark (unchecked - use `GameModel::apply_move`).
    pub(crate) fn place_current(&mut self, pos: Position) -> bool {
        self.board.place(pos, self.current_player)
    }

    /// Hands the turn to the other player.
    pub(crate) fn switch_player(&mut self) -> Player {
        self.current_player = self.current_player.opponent();
        self.current_player
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Clears board and status, keeping the player to move.
    pub(crate) fn clear(&mut self) {
        self.board.clear();
        self.status = GameStatus::InProgress;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
