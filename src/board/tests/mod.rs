//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-piece reach predicates and path blocking
//! - `make_unmake.rs` - Move application and exact undo
//! - `fen.rs` - Position setup and castling-rights loading
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use crate::board::Position;

pub(crate) fn sq(s: &str) -> Position {
    s.parse().expect("valid square")
}
