//! Synchronization for hosts that serve several matches.
//!
//! A [`Match`] is single-threaded. Hosts that receive moves for the same
//! match from more than one connection share it through [`SharedMatch`],
//! which serializes every call on a per-match lock.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Color, MoveError, Position};
use crate::game::{Match, MoveOutcome};

/// A thread-safe handle to one match.
///
/// This wraps `Arc<Mutex<Match>>`; clones refer to the same game.
#[derive(Clone, Debug)]
pub struct SharedMatch(Arc<Mutex<Match>>);

impl SharedMatch {
    #[must_use]
    pub fn new(game: Match) -> Self {
        SharedMatch(Arc::new(Mutex::new(game)))
    }

    /// Lock the match for a sequence of calls that must not interleave.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, Match> {
        self.0.lock()
    }

    /// Play a move under the lock.
    pub fn attempt_move(&self, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
        self.0.lock().attempt_move(from, to)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.0.lock().side_to_move()
    }

    #[must_use]
    pub fn is_in_check(&self) -> Option<Color> {
        self.0.lock().is_in_check()
    }

    /// Checkmate search under the lock.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.0.lock().is_checkmate(color)
    }

    /// True if both handles refer to the same match.
    #[must_use]
    pub fn same_match(&self, other: &SharedMatch) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedMatch {
    fn default() -> Self {
        Self::new(Match::new())
    }
}

impl From<Match> for SharedMatch {
    fn from(game: Match) -> Self {
        SharedMatch::new(game)
    }
}
