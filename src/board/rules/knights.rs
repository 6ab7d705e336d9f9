use super::Position;

pub(super) fn can_reach(from: Position, to: Position) -> bool {
    let (dr, dc) = from.delta(to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}
