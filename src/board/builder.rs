//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_match::board::{BoardBuilder, Color, PieceKind, Position};
//!
//! let e1: Position = "e1".parse().unwrap();
//! let e8: Position = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .build();
//! assert_eq!(board.pieces().count(), 2);
//! ```

use super::{Board, Color, Piece, PieceKind, Position};

/// A fluent builder for constructing `Board` layouts.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial array.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Place an unmoved piece, replacing whatever the square held.
    #[must_use]
    pub fn piece(self, pos: Position, color: Color, kind: PieceKind) -> Self {
        self.place(pos, Piece::new(kind, color))
    }

    /// Place a piece flagged as having already moved.
    #[must_use]
    pub fn moved_piece(self, pos: Position, color: Color, kind: PieceKind) -> Self {
        self.place(pos, Piece::new(kind, color).moved())
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.pieces.retain(|(p, _)| *p != pos);
        self
    }

    fn place(mut self, pos: Position, piece: Piece) -> Self {
        self.pieces.retain(|(p, _)| *p != pos);
        self.pieces.push((pos, piece));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (pos, piece) in self.pieces {
            board.replace(pos, Some(piece));
        }
        board
    }
}
