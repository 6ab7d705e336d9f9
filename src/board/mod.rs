//! Chess board representation and piece movement rules.
//!
//! The board is a plain 8×8 grid of optional pieces. Each piece kind owns a
//! geometric reach predicate; turn order, self-check and castling live in
//! [`crate::game`].
//!
//! # Example
//! ```
//! use chess_match::board::{Board, Position};
//!
//! let board = Board::new();
//! let e2: Position = "e2".parse().unwrap();
//! let e4: Position = "e4".parse().unwrap();
//! let pawn = board.piece_at(e2).unwrap();
//! assert!(pawn.can_reach(e2, e4, &board));
//! ```

mod builder;
mod error;
mod fen;
mod make_unmake;
mod render;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, NotationError, PositionError};
pub use render::{PieceLetters, RenderStyle};
pub use state::Board;
pub use types::{CastleSide, Color, Piece, PieceKind, Position};

pub(crate) use make_unmake::{Applied, UndoRecord};
