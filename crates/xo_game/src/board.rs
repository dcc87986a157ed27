//! The 3x3 board: occupied cells only.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from occupied positions to their owner.
///
/// Vacant cells are absent keys. A placed mark is never replaced or
/// removed; the only way back to a vacant cell is [`Board::clear`],
/// which the model calls on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: BTreeMap<Position, Player>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of the position, if occupied.
    pub fn get(&self, pos: Position) -> Option<Player> {
        self.cells.get(&pos).copied()
    }

    /// Checks if a position is unoccupied.
    pub fn is_vacant(&self, pos: Position) -> bool {
        !self.cells.contains_key(&pos)
    }

    /// Checks if the position is held by `player`.
    pub fn is_occupied_by(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Some(player)
    }

    /// Positions held by `player`, in iteration order.
    pub fn occupied_by(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(move |(_, owner)| **owner == player)
            .map(|(pos, _)| *pos)
    }

    /// Unoccupied positions, in iteration order.
    pub fn vacant(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_vacant(*pos))
            .collect()
    }

    /// Number of occupied positions.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no position is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when all 9 positions are occupied.
    pub fn is_full(&self) -> bool {
        self.cells.len() == Position::ALL.len()
    }

    /// Records `player` at a vacant position.
    ///
    /// Returns `false` and leaves the board untouched if the position is
    /// already occupied.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> bool {
        if self.cells.contains_key(&pos) {
            return false;
        }
        self.cells.insert(pos, player);
        true
    }

    /// Removes every mark.
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Formats the board as a human-readable grid with column and row labels.
    pub fn render(&self) -> String {
        let mut result = String::from("  A B C\n");
        for row in 0..3 {
            result.push_str(&(row + 1).to_string());
            for column in 0..3 {
                result.push(' ');
                let symbol = Position::from_coords(column, row)
                    .and_then(|pos| self.get(pos))
                    .map_or('.', |player| match player {
                        Player::X => 'X',
                        Player::O => 'O',
                    });
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
