use super::Position;

/// Single steps only. Castling is dispatched by the match before this
/// predicate is consulted.
pub(super) fn can_reach(from: Position, to: Position) -> bool {
    from.is_adjacent(to)
}
