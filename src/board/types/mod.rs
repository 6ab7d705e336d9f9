//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Position` - a validated board coordinate
//! - `CastleSide` - the wing of a castle

mod castling;
mod piece;
mod position;

pub use castling::CastleSide;
pub use piece::{Color, Piece, PieceKind};
pub use position::Position;
