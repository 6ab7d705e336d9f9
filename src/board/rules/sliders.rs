use super::{Board, Position};

pub(super) fn bishop_can_reach(from: Position, to: Position, board: &Board) -> bool {
    from.same_diagonal(to) && board.path_clear(from, to)
}

pub(super) fn rook_can_reach(from: Position, to: Position, board: &Board) -> bool {
    (from.same_row(to) || from.same_column(to)) && board.path_clear(from, to)
}

pub(super) fn queen_can_reach(from: Position, to: Position, board: &Board) -> bool {
    rook_can_reach(from, to, board) || bishop_can_reach(from, to, board)
}
