use super::error::FenError;
use super::{Board, CastleSide, Color, Piece, PieceKind, Position};

impl Board {
    /// Parse the placement, side-to-move and (optional) castling fields of a
    /// FEN string. Remaining fields are ignored.
    ///
    /// Kings and rooks are loaded as having moved unless the castling field
    /// grants a right that needs them, in which case the king and the
    /// matching corner rook are loaded unmoved.
    pub fn try_from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount {
                found: ranks.len(),
            });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut column = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    column += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let pos = Position::from_row_col(row, column).ok_or(FenError::BadFileCount {
                    rank: 8 - row,
                    files: column + 1,
                })?;
                let piece = Piece::new(kind, color);
                let piece = if matches!(kind, PieceKind::King | PieceKind::Rook) {
                    piece.moved()
                } else {
                    piece
                };
                board.replace(pos, Some(piece));
                column += 1;
            }
            if column != 8 {
                return Err(FenError::BadFileCount {
                    rank: 8 - row,
                    files: column,
                });
            }
        }

        for color in Color::BOTH {
            let found = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if let Some(castling) = parts.get(2) {
            for c in castling.chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::KingSide),
                    'Q' => (Color::White, CastleSide::QueenSide),
                    'k' => (Color::Black, CastleSide::KingSide),
                    'q' => (Color::Black, CastleSide::QueenSide),
                    '-' => continue,
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                board.grant_castling(color, side);
            }
        }

        Ok((board, side_to_move))
    }

    /// Clear `has_moved` on the king and the corner rook for `side`, if both
    /// stand on their home squares.
    fn grant_castling(&mut self, color: Color, side: CastleSide) {
        let row = color.back_row();
        let (Some(king_home), Some(rook_home)) = (
            Position::from_row_col(row, 4),
            Position::from_row_col(row, side.rook_column()),
        ) else {
            return;
        };
        if let (Some(king), Some(rook)) = (self.piece_at(king_home), self.piece_at(rook_home)) {
            let king_ok = king.kind == PieceKind::King && king.color == color;
            let rook_ok = rook.kind == PieceKind::Rook && rook.color == color;
            if king_ok && rook_ok {
                self.replace(king_home, Some(Piece::new(PieceKind::King, color)));
                self.replace(rook_home, Some(Piece::new(PieceKind::Rook, color)));
            }
        }
    }

    /// True if `color` still holds the castling right on `side`.
    #[must_use]
    pub fn can_still_castle(&self, color: Color, side: CastleSide) -> bool {
        let row = color.back_row();
        let king = Position::from_row_col(row, 4).and_then(|pos| self.piece_at(pos));
        let rook =
            Position::from_row_col(row, side.rook_column()).and_then(|pos| self.piece_at(pos));
        king == Some(Piece::new(PieceKind::King, color))
            && rook == Some(Piece::new(PieceKind::Rook, color))
    }

    /// Placement, side to move and castling fields in FEN notation.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for column in 0..8 {
                match Position::from_row_col(row, column).and_then(|pos| self.piece_at(pos)) {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = if side_to_move == Color::White { "w" } else { "b" };
        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.can_still_castle(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        format!("{} {} {}", rows.join("/"), active, castling)
    }
}
