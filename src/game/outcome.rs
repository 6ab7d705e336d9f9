//! Structured result of a committed move.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{CastleSide, Color, PieceKind, Position};

/// Everything a collaborator needs to report a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    /// Side that made the move
    pub color: Color,
    /// Kind of the piece before any promotion
    pub moved: PieceKind,
    pub captured: Option<PieceKind>,
    pub castled: Option<CastleSide>,
    pub promoted: bool,
    /// King left in check by this move, if any
    pub checks: Option<Color>,
    /// The opponent has no escape from the check
    pub is_mate: bool,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.checks.is_some()
    }

    /// Rook displacement implied by a castle, as (from, to).
    #[must_use]
    pub fn rook_move(&self) -> Option<(Position, Position)> {
        let side = self.castled?;
        let row = self.from.row();
        let rook_from = Position::from_row_col(row, side.rook_column())?;
        let rook_to = self.to.offset(0, side.rook_landing_offset())?;
        Some((rook_from, rook_to))
    }
}
