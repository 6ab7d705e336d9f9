//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A square on the board, named by file letter and rank number.
///
/// Grid projection: row 0 is rank 8, column 0 is file `a`. Out-of-range
/// coordinates cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Create a position from a file letter (`a`..=`h`) and rank (1..=8).
    pub fn new(file: char, rank: u8) -> Result<Self, PositionError> {
        if !('a'..='h').contains(&file) {
            return Err(PositionError::FileOutOfBounds { file });
        }
        if !(1..=8).contains(&rank) {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        Ok(Position {
            row: 8 - rank,
            column: file as u8 - b'a',
        })
    }

    /// Create a position from zero-based grid indices.
    #[must_use]
    pub const fn from_row_col(row: usize, column: usize) -> Option<Self> {
        if row < 8 && column < 8 {
            Some(Position {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Offset by a signed row/column delta, staying on the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        let row = self.row as isize + d_row;
        let column = self.column as isize + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Position::from_row_col(row as usize, column as usize)
        } else {
            None
        }
    }

    /// All 64 positions, row by row from a8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64u8).map(|idx| Position {
            row: idx / 8,
            column: idx % 8,
        })
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.column as usize
    }

    /// File letter, `a`..=`h`
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.column) as char
    }

    /// Rank number, 1..=8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// Signed (row, column) distance from `self` to `other`.
    #[inline]
    #[must_use]
    pub fn delta(self, other: Position) -> (isize, isize) {
        (
            other.row as isize - self.row as isize,
            other.column as isize - self.column as isize,
        )
    }

    /// True if both squares share a diagonal. A square is not on a diagonal
    /// with itself.
    #[must_use]
    pub fn same_diagonal(self, other: Position) -> bool {
        let (dr, dc) = self.delta(other);
        dr != 0 && dr.abs() == dc.abs()
    }

    /// True if `other` is one king step away (Chebyshev distance 1).
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        let (dr, dc) = self.delta(other);
        dr.abs().max(dc.abs()) == 1
    }

    /// True if both squares are on the same row and distinct.
    #[must_use]
    pub fn same_row(self, other: Position) -> bool {
        self.row == other.row && self.column != other.column
    }

    /// True if both squares are on the same column and distinct.
    #[must_use]
    pub fn same_column(self, other: Position) -> bool {
        self.column == other.column && self.row != other.row
    }

    /// Squares strictly between `self` and `other` along a row, column or
    /// diagonal. Empty when the squares are not aligned or are adjacent.
    pub fn between(self, other: Position) -> impl Iterator<Item = Position> {
        let (dr, dc) = self.delta(other);
        let aligned = self.same_row(other) || self.same_column(other) || self.same_diagonal(other);
        let steps = if aligned { dr.abs().max(dc.abs()) } else { 0 };
        let (step_r, step_c) = (dr.signum(), dc.signum());
        (1..steps).filter_map(move |i| self.offset(step_r * i, step_c * i))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PositionError::InvalidNotation {
                notation: s.to_string(),
            });
        };
        let rank = rank
            .to_digit(10)
            .ok_or_else(|| PositionError::InvalidNotation {
                notation: s.to_string(),
            })?;
        Position::new(file, rank as u8)
    }
}
