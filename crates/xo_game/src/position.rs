//! Board cells addressed by column letter and row number.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board, labelled by column (`A`-`C`) and row (`1`-`3`).
///
/// Declaration order is the iteration order: row 1 left to right, then
/// row 2, then row 3. The ordering exists for iteration only and carries
/// no game meaning.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Column A, row 1.
    A1,
    /// Column B, row 1.
    B1,
    /// Column C, row 1.
    C1,
    /// Column A, row 2.
    A2,
    /// Column B, row 2.
    B2,
    /// Column C, row 2.
    C2,
    /// Column A, row 3.
    A3,
    /// Column B, row 3.
    B3,
    /// Column C, row 3.
    C3,
}

impl Position {
    /// All 9 positions in iteration order.
    pub const ALL: [Position; 9] = [
        Position::A1,
        Position::B1,
        Position::C1,
        Position::A2,
        Position::B2,
        Position::C2,
        Position::A3,
        Position::B3,
        Position::C3,
    ];

    /// Label such as `"B2"`.
    pub fn label(self) -> &'static str {
        match self {
            Position::A1 => "A1",
            Position::B1 => "B1",
            Position::C1 => "C1",
            Position::A2 => "A2",
            Position::B2 => "B2",
            Position::C2 => "C2",
            Position::A3 => "A3",
            Position::B3 => "B3",
            Position::C3 => "C3",
        }
    }

    /// Index in iteration order (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from its iteration index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based column (A = 0).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Zero-based row (row 1 = 0).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Creates a position from zero-based column and row.
    pub fn from_coords(column: usize, row: usize) -> Option<Self> {
        if column < 3 && row < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Accepts a label (`"b2"`, `"B2"`) or a 1-based cell number (`"5"`).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| PositionParseError::new(s));
        }

        let mut chars = trimmed.chars();
        let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PositionParseError::new(s));
        };

        let column = match column.to_ascii_uppercase() {
            'A' => 0,
            'B' => 1,
            'C' => 2,
            _ => return Err(PositionParseError::new(s)),
        };
        let row = match row {
            '1' => 0,
            '2' => 1,
            '3' => 2,
            _ => return Err(PositionParseError::new(s)),
        };

        Self::from_coords(column, row).ok_or_else(|| PositionParseError::new(s))
    }
}

/// Text that does not name a board cell.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid position {:?} at {}:{}", input, file, line)]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(input: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            input: input.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
