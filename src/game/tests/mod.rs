//! Match tests.
//!
//! - `attempt.rs` - Turn order, rejections, captures and promotion
//! - `castling.rs` - Castling rights, path, attacked squares and flags
//! - `check.rs` - Check detection and the checkmate search
//! - `playout.rs` - Seeded random games and property tests

mod attempt;

use crate::board::{MoveError, Position};
use crate::game::{Match, MoveOutcome};

pub(super) fn sq(s: &str) -> Position {
    s.parse().expect("valid square")
}

/// Split "e2e4" into its two squares.
pub(super) fn squares(mv: &str) -> (Position, Position) {
    (sq(&mv[..2]), sq(&mv[2..]))
}

pub(super) fn try_play(game: &mut Match, mv: &str) -> Result<MoveOutcome, MoveError> {
    let (from, to) = squares(mv);
    game.attempt_move(from, to)
}

pub(super) fn play(game: &mut Match, mv: &str) -> MoveOutcome {
    try_play(game, mv).unwrap_or_else(|err| panic!("{mv} should be legal: {err}"))
}

pub(super) fn play_all(game: &mut Match, moves: &[&str]) -> Vec<MoveOutcome> {
    moves.iter().map(|mv| play(game, mv)).collect()
}

pub(super) fn from_fen(fen: &str) -> Match {
    Match::try_from_fen(fen).expect("valid FEN")
}

/// Assert a move is refused with `expected` and nothing changed.
pub(super) fn assert_rejected(game: &mut Match, mv: &str, expected: MoveError) {
    let board = game.board().clone();
    let side = game.side_to_move();
    assert_eq!(try_play(game, mv), Err(expected), "{mv}");
    assert_eq!(game.board(), &board, "{mv} changed the board");
    assert_eq!(game.side_to_move(), side, "{mv} changed the turn");
}
