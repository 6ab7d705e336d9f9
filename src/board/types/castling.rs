//! Castling side type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which wing a castle goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Side implied by a two-column king step (`+2` king side, `-2` queen side).
    #[must_use]
    pub const fn from_king_step(d_column: isize) -> Option<Self> {
        match d_column {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Column of the rook before castling.
    #[inline]
    #[must_use]
    pub const fn rook_column(self) -> usize {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column offset from the king's landing square to the rook's landing
    /// square: the rook ends on the square the king passed over.
    #[inline]
    #[must_use]
    pub const fn rook_landing_offset(self) -> isize {
        match self {
            CastleSide::KingSide => -1,
            CastleSide::QueenSide => 1,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => write!(f, "O-O"),
            CastleSide::QueenSide => write!(f, "O-O-O"),
        }
    }
}
