use super::{Color, Piece, PieceKind, Position};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid of optional pieces. Row 0 is rank 8, column 0 is file `a`.
///
/// Each piece lives in exactly one cell; moving a piece takes it out of its
/// source cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard initial array.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (column, kind) in BACK_RANK.into_iter().enumerate() {
            for color in Color::BOTH {
                board.cells[color.back_row()][column] = Some(Piece::new(kind, color));
                board.cells[color.pawn_start_row()][column] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row()][pos.column()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Color of the piece on a square, if any
    #[must_use]
    pub fn color_on(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|piece| piece.color)
    }

    /// Replace the contents of a square, returning what was there.
    pub(crate) fn replace(&mut self, pos: Position, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[pos.row()][pos.column()], piece)
    }

    /// Every occupied square with its piece, row by row from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Square of the given color's king, if present.
    #[must_use]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// True if every square strictly between `from` and `to` is empty.
    #[must_use]
    pub fn path_clear(&self, from: Position, to: Position) -> bool {
        from.between(to).all(|pos| self.is_empty(pos))
    }

    /// True if any piece of `by` reaches `target` under its movement rules.
    #[must_use]
    pub fn is_attacked(&self, target: Position, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, piece)| piece.can_reach(from, target, self))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
