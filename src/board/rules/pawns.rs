use super::{Board, Position};
use crate::board::Color;

/// Forward pushes onto empty squares, a double push from the start row over
/// two empty squares, and diagonal steps onto occupied squares. No en passant.
pub(super) fn can_reach(color: Color, from: Position, to: Position, board: &Board) -> bool {
    let dir = color.pawn_direction();
    let (dr, dc) = from.delta(to);

    if dc == 0 && dr == dir {
        return board.is_empty(to);
    }
    if dc == 0 && dr == 2 * dir && from.row() == color.pawn_start_row() {
        return board.path_clear(from, to) && board.is_empty(to);
    }
    if dc.abs() == 1 && dr == dir {
        return !board.is_empty(to);
    }
    false
}
