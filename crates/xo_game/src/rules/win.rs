//! Win detection logic.

use super::super::{Board, Player, Position};
use std::collections::BTreeSet;
use tracing::instrument;

/// The 8 winning lines.
pub const LINES: [[Position; 3]; 8] = [
    // Columns
    [Position::A1, Position::A2, Position::A3],
    [Position::B1, Position::B2, Position::B3],
    [Position::C1, Position::C2, Position::C3],
    // Rows
    [Position::A1, Position::B1, Position::C1],
    [Position::A2, Position::B2, Position::C2],
    [Position::A3, Position::B3, Position::C3],
    // Diagonals
    [Position::A1, Position::B2, Position::C3],
    [Position::C1, Position::B2, Position::A3],
];

/// Checks whether a set of positions contains every cell of some line.
pub fn completes_line(marked: &BTreeSet<Position>) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| marked.contains(pos)))
}

/// Checks if there is a winner on the board.
///
/// Each player's marks are tested against every line. X is always tested
/// before O, so a board where both own a line reports X.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O].into_iter().find(|player| {
        let marked: BTreeSet<Position> = board.occupied_by(*player).collect();
        completes_line(&marked)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.place(*pos, player);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::A1, Position::A2]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::X, &[Position::A1, Position::B1]);
        board.place(Position::C1, Player::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_x_checked_before_o() {
        let mut board = board_with(Player::O, &[Position::A3, Position::B3, Position::C3]);
        for pos in [Position::A1, Position::B1, Position::C1] {
            board.place(pos, Player::X);
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_superset_of_line_wins() {
        let board = board_with(
            Player::O,
            &[Position::C1, Position::B2, Position::A3, Position::A1],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }
}
