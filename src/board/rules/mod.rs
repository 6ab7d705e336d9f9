//! Per-variant movement rules.
//!
//! Geometry only: these predicates ignore whose turn it is, what color
//! stands on the target and whether the mover's king ends up attacked.
//! The match orchestrator layers those checks on top.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Piece, PieceKind, Position};

impl Piece {
    /// True if this piece, standing on `from`, can travel to `to` on `board`.
    #[must_use]
    pub fn can_reach(self, from: Position, to: Position, board: &Board) -> bool {
        if from == to {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => pawns::can_reach(self.color, from, to, board),
            PieceKind::Knight => knights::can_reach(from, to),
            PieceKind::Bishop => sliders::bishop_can_reach(from, to, board),
            PieceKind::Rook => sliders::rook_can_reach(from, to, board),
            PieceKind::Queen => sliders::queen_can_reach(from, to, board),
            PieceKind::King => kings::can_reach(from, to),
        }
    }
}
