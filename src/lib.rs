//! Chess rules for two-player matches.
//!
//! [`board`] holds the grid, coordinates and per-piece movement geometry.
//! [`game`] adds turn order, self-check rejection, castling, promotion and
//! the checkmate search. [`notation`] parses and formats coordinate move
//! text at the host boundary, [`sync`] shares a match between threads and
//! [`console`] drives a match from a text stream.

mod trace;

pub mod board;
pub mod console;
pub mod game;
pub mod notation;
pub mod sync;

pub use board::{Board, CastleSide, Color, MoveError, Piece, PieceKind, Position};
pub use game::{Match, MatchConfig, MoveOutcome};
pub use notation::MoveRequest;
pub use sync::SharedMatch;
