use super::{Board, CastleSide, Piece, PieceKind, Position};

/// Squares touched by one applied move with their previous contents.
///
/// A plain move touches two squares, a castle four. Feeding the record back
/// to [`Board::unmake`] restores the board exactly, including `has_moved`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "dropping an undo record makes the move permanent"]
pub(crate) struct UndoRecord {
    saved: [Option<(Position, Option<Piece>)>; 4],
    len: usize,
}

impl UndoRecord {
    fn new() -> Self {
        UndoRecord {
            saved: [None; 4],
            len: 0,
        }
    }

    fn save(&mut self, pos: Position, previous: Option<Piece>) {
        self.saved[self.len] = Some((pos, previous));
        self.len += 1;
    }
}

/// What a plain move did besides relocating the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Applied {
    pub(crate) moved: PieceKind,
    pub(crate) captured: Option<PieceKind>,
    pub(crate) promoted: bool,
}

impl Board {
    /// Move the piece on `from` to `to`, capturing whatever stands there.
    ///
    /// A pawn arriving on its promotion row becomes a queen of its color.
    /// Returns `None` if `from` is empty; the board is then untouched.
    pub(crate) fn make_move(
        &mut self,
        from: Position,
        to: Position,
    ) -> Option<(Applied, UndoRecord)> {
        let piece = self.piece_at(from)?;
        let mut undo = UndoRecord::new();

        let promoted = piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row();
        let landing = if promoted {
            Piece::new(PieceKind::Queen, piece.color).moved()
        } else {
            piece.moved()
        };

        undo.save(from, self.replace(from, None));
        let captured = self.replace(to, Some(landing));
        undo.save(to, captured);

        let applied = Applied {
            moved: piece.kind,
            captured: captured.map(|p| p.kind),
            promoted,
        };
        Some((applied, undo))
    }

    /// Relocate king and rook for a castle on `side`. The caller has checked
    /// that both pieces stand on their squares and the path is clear.
    pub(crate) fn make_castle(
        &mut self,
        king_from: Position,
        side: CastleSide,
    ) -> Option<UndoRecord> {
        let step = if side == CastleSide::KingSide { 2 } else { -2 };
        let king_to = king_from.offset(0, step)?;
        let rook_from = Position::from_row_col(king_from.row(), side.rook_column())?;
        let rook_to = king_to.offset(0, side.rook_landing_offset())?;

        let king = self.piece_at(king_from)?;
        let rook = self.piece_at(rook_from)?;
        let mut undo = UndoRecord::new();

        undo.save(king_from, self.replace(king_from, None));
        undo.save(rook_from, self.replace(rook_from, None));
        undo.save(king_to, self.replace(king_to, Some(king.moved())));
        undo.save(rook_to, self.replace(rook_to, Some(rook.moved())));
        Some(undo)
    }

    /// Restore every square saved in `undo`, newest first.
    pub(crate) fn unmake(&mut self, undo: UndoRecord) {
        for &(pos, previous) in undo.saved[..undo.len].iter().rev().flatten() {
            self.replace(pos, previous);
        }
    }
}
