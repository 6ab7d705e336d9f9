//! Coordinate move notation at the boundary with hosts.
//!
//! Inbound text such as `e2e4`, `e2-e4` or `E2 E4` is normalized before any
//! [`Position`] is built, so the engine never sees malformed coordinates.
//! Outbound text is the plain four-character form; a castle carries the
//! rook's displacement as a second pair (`e1g1h1f1`).

use std::fmt;
use std::str::FromStr;

use crate::board::{NotationError, Position};
use crate::game::MoveOutcome;

/// A parsed source/destination pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        MoveRequest { from, to }
    }

    /// Parse move text, ignoring whitespace, dashes and letter case.
    pub fn parse(text: &str) -> Result<Self, NotationError> {
        let normalized: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if normalized.len() != 4 {
            return Err(NotationError::InvalidLength {
                len: normalized.len(),
            });
        }

        let (Some(from_rank), Some(to_rank)) =
            (normalized[1].to_digit(10), normalized[3].to_digit(10))
        else {
            return Err(NotationError::MissingDigits {
                notation: normalized.iter().collect(),
            });
        };

        let from = Position::new(normalized[0], from_rank as u8)?;
        let to = Position::new(normalized[2], to_rank as u8)?;
        Ok(MoveRequest { from, to })
    }

    /// Text to send back to hosts for a committed move.
    #[must_use]
    pub fn outbound(outcome: &MoveOutcome) -> String {
        let mut text = format!("{}{}", outcome.from, outcome.to);
        if let Some((rook_from, rook_to)) = outcome.rook_move() {
            text.push_str(&format!("{rook_from}{rook_to}"));
        }
        text
    }
}

impl FromStr for MoveRequest {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveRequest::parse(s)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
