//! Text rendering of the board for consoles and logs.

use std::fmt;

use super::{Board, Color, PieceKind, Position};

/// Letter set used for piece names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PieceLetters {
    /// K Q R B N P
    #[default]
    English,
    /// R D T F C P (roi, dame, tour, fou, cavalier, pion)
    French,
}

impl PieceLetters {
    /// Uppercase letter for a piece kind.
    #[must_use]
    pub const fn letter(self, kind: PieceKind) -> char {
        match (self, kind) {
            (PieceLetters::English, PieceKind::Pawn) => 'P',
            (PieceLetters::English, PieceKind::Knight) => 'N',
            (PieceLetters::English, PieceKind::Bishop) => 'B',
            (PieceLetters::English, PieceKind::Rook) => 'R',
            (PieceLetters::English, PieceKind::Queen) => 'Q',
            (PieceLetters::English, PieceKind::King) => 'K',
            (PieceLetters::French, PieceKind::Pawn) => 'P',
            (PieceLetters::French, PieceKind::Knight) => 'C',
            (PieceLetters::French, PieceKind::Bishop) => 'F',
            (PieceLetters::French, PieceKind::Rook) => 'T',
            (PieceLetters::French, PieceKind::Queen) => 'D',
            (PieceLetters::French, PieceKind::King) => 'R',
        }
    }
}

/// How the board is drawn: uppercase is White, lowercase Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub letters: PieceLetters,
    pub empty: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            letters: PieceLetters::English,
            empty: '.',
        }
    }
}

impl Board {
    /// Draw the board as eight rows labelled 8 down to 1, then a file footer.
    #[must_use]
    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = String::with_capacity(9 * 18);
        for row in 0..8 {
            out.push_str(&(8 - row).to_string());
            for column in 0..8 {
                out.push(' ');
                let cell = Position::from_row_col(row, column).and_then(|pos| self.piece_at(pos));
                out.push(match cell {
                    Some(piece) if piece.color == Color::White => style.letters.letter(piece.kind),
                    Some(piece) => style.letters.letter(piece.kind).to_ascii_lowercase(),
                    None => style.empty,
                });
            }
            out.push('\n');
        }
        out.push(' ');
        for file in 'a'..='h' {
            out.push(' ');
            out.push(file);
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::default()))
    }
}
