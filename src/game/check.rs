use super::Match;
use crate::board::{Color, Position};
use crate::trace::trace_log;

impl Match {
    /// Color of a king currently under attack, or `None`.
    ///
    /// Both kings can only be attacked together on a tentative board during
    /// validation; the answer is then the side that just moved, i.e. the
    /// side whose move must be undone.
    #[must_use]
    pub fn is_in_check(&self) -> Option<Color> {
        self.check_status(self.side_to_move.opponent())
    }

    /// Check detection with an explicit tie-break color for the case where
    /// both kings are attacked.
    pub(super) fn check_status(&self, last_mover: Color) -> Option<Color> {
        match (self.king_attacked(Color::White), self.king_attacked(Color::Black)) {
            (true, true) => Some(last_mover),
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            (false, false) => None,
        }
    }

    fn king_attacked(&self, color: Color) -> bool {
        self.board
            .king_position(color)
            .is_some_and(|king| self.board.is_attacked(king, color.opponent()))
    }

    /// True if `color` is in check and no move of any of its pieces to any
    /// square escapes.
    ///
    /// Every piece × square pair goes through the same legality path as
    /// [`Match::attempt_move`], castling and self-check included, and each
    /// successful trial is taken back at once. If `color` is not on move the
    /// search borrows the turn and returns it afterwards.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        if !self.king_attacked(color) {
            return false;
        }

        let saved_turn = self.side_to_move;
        self.side_to_move = color;
        let origins: Vec<Position> = self.board.pieces_of(color).map(|(pos, _)| pos).collect();

        let mut escape = None;
        'search: for &from in &origins {
            for to in Position::all() {
                if let Ok(committed) = self.execute(from, to) {
                    self.rollback(committed);
                    escape = Some((from, to));
                    break 'search;
                }
            }
        }

        self.side_to_move = saved_turn;
        match escape {
            Some((from, to)) => {
                trace_log!("{color} escapes check with {from}{to}");
                false
            }
            None => true,
        }
    }
}
