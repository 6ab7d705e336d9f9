use super::Match;
use crate::board::{CastleSide, MoveError, PieceKind, Position, UndoRecord};

/// File index a king must stand on to castle.
const KING_HOME_COLUMN: usize = 4;

impl Match {
    /// Castle the side to move's king from `king_from` toward `side`.
    ///
    /// Requires an unmoved king on its home square, an unmoved rook of the
    /// same color in the corner, empty squares between them, and that the
    /// king is not attacked on its start, passed-over or landing square. A
    /// refused castle leaves the board untouched.
    pub(super) fn castle(
        &mut self,
        king_from: Position,
        side: CastleSide,
    ) -> Result<UndoRecord, MoveError> {
        let color = self.side_to_move;
        let opponent = color.opponent();
        let row = color.back_row();

        let king_home = king_from.row() == row && king_from.column() == KING_HOME_COLUMN;
        let king_fresh = self
            .board
            .piece_at(king_from)
            .is_some_and(|king| king.kind == PieceKind::King && !king.has_moved);
        if !king_home || !king_fresh {
            return Err(MoveError::CastlingNotAllowed { side });
        }

        let rook_from = Position::from_row_col(row, side.rook_column())
            .ok_or(MoveError::CastlingNotAllowed { side })?;
        let rook_fresh = self.board.piece_at(rook_from).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
        });
        if !rook_fresh {
            return Err(MoveError::CastlingNotAllowed { side });
        }

        if !self.board.path_clear(king_from, rook_from) {
            return Err(MoveError::CastlingPathBlocked { side });
        }
        if self.board.is_attacked(king_from, opponent) {
            return Err(MoveError::CastlingThroughCheck { side });
        }

        let undo = self
            .board
            .make_castle(king_from, side)
            .ok_or(MoveError::CastlingNotAllowed { side })?;

        // King on its landing square, rook on the square the king crossed.
        let step = if side == CastleSide::KingSide { 2 } else { -2 };
        let crossed = [king_from.offset(0, step), king_from.offset(0, step / 2)];
        let attacked = crossed
            .into_iter()
            .flatten()
            .any(|pos| self.board.is_attacked(pos, opponent));
        if attacked {
            self.board.unmake(undo);
            return Err(MoveError::CastlingThroughCheck { side });
        }
        Ok(undo)
    }
}
