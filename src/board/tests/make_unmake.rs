//! Make/unmake move tests.

use rand::prelude::*;

use super::sq;
use crate::board::{Board, BoardBuilder, CastleSide, Color, Piece, PieceKind, Position, UndoRecord};

#[test]
fn test_plain_move_and_undo() {
    let mut board = Board::new();
    let original = board.clone();

    let (applied, undo) = board.make_move(sq("g1"), sq("f3")).expect("knight on g1");
    assert_eq!(applied.moved, PieceKind::Knight);
    assert_eq!(applied.captured, None);
    assert!(!applied.promoted);
    assert!(board.is_empty(sq("g1")));
    let knight = board.piece_at(sq("f3")).expect("knight landed");
    assert!(knight.has_moved);

    board.unmake(undo);
    assert_eq!(board, original);
}

#[test]
fn test_capture_and_undo_restores_victim() {
    let mut board = BoardBuilder::new()
        .piece(sq("d1"), Color::White, PieceKind::Queen)
        .piece(sq("d7"), Color::Black, PieceKind::Bishop)
        .build();
    let original = board.clone();

    let (applied, undo) = board.make_move(sq("d1"), sq("d7")).expect("queen on d1");
    assert_eq!(applied.captured, Some(PieceKind::Bishop));
    assert_eq!(board.pieces().count(), 1);

    board.unmake(undo);
    assert_eq!(board, original);
}

#[test]
fn test_make_move_from_empty_square_is_noop() {
    let mut board = Board::new();
    assert!(board.make_move(sq("e4"), sq("e5")).is_none());
    assert_eq!(board, Board::new());
}

#[test]
fn test_white_promotion_on_rank_eight() {
    let mut board = BoardBuilder::new()
        .piece(sq("a7"), Color::White, PieceKind::Pawn)
        .build();
    let (applied, undo) = board.make_move(sq("a7"), sq("a8")).expect("pawn on a7");
    assert!(applied.promoted);
    assert_eq!(applied.moved, PieceKind::Pawn);
    let queen = board.piece_at(sq("a8")).expect("promoted piece");
    assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::White));

    board.unmake(undo);
    assert_eq!(
        board.piece_at(sq("a7")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert!(board.is_empty(sq("a8")));
}

#[test]
fn test_black_promotion_on_rank_one_with_capture() {
    let mut board = BoardBuilder::new()
        .piece(sq("g2"), Color::Black, PieceKind::Pawn)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .build();
    let (applied, _undo) = board.make_move(sq("g2"), sq("h1")).expect("pawn on g2");
    assert!(applied.promoted);
    assert_eq!(applied.captured, Some(PieceKind::Rook));
    let queen = board.piece_at(sq("h1")).expect("promoted piece");
    assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Black));
}

#[test]
fn test_pawn_short_of_last_rank_stays_pawn() {
    let mut board = BoardBuilder::new()
        .piece(sq("b6"), Color::White, PieceKind::Pawn)
        .build();
    let (applied, _undo) = board.make_move(sq("b6"), sq("b7")).expect("pawn on b6");
    assert!(!applied.promoted);
    assert_eq!(board.piece_at(sq("b7")).map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_castle_relocates_both_pieces() {
    let mut board = Board::new();
    for file in ['f', 'g'] {
        board.replace(sq(&format!("{file}1")), None);
    }
    let original = board.clone();

    let undo = board
        .make_castle(sq("e1"), CastleSide::KingSide)
        .expect("king and rook present");
    let king = board.piece_at(sq("g1")).expect("king on g1");
    let rook = board.piece_at(sq("f1")).expect("rook on f1");
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(king.has_moved && rook.has_moved);
    assert!(board.is_empty(sq("e1")) && board.is_empty(sq("h1")));

    board.unmake(undo);
    assert_eq!(board, original);
}

#[test]
fn test_queen_side_castle_squares() {
    let mut board = BoardBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("a8"), Color::Black, PieceKind::Rook)
        .build();
    let _undo = board
        .make_castle(sq("e8"), CastleSide::QueenSide)
        .expect("king and rook present");
    assert_eq!(board.piece_at(sq("c8")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(board.piece_at(sq("d8")).map(|p| p.kind), Some(PieceKind::Rook));
}

#[test]
fn test_random_playout_round_trip() {
    let mut board = Board::new();
    let initial = board.clone();
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<UndoRecord> = Vec::new();
    let squares: Vec<Position> = Position::all().collect();

    for _ in 0..200 {
        let occupied: Vec<Position> = board.pieces().map(|(pos, _)| pos).collect();
        let Some(&from) = occupied.choose(&mut rng) else {
            break;
        };
        let Some(&to) = squares.choose(&mut rng) else {
            break;
        };
        if from == to {
            continue;
        }
        if let Some((_, undo)) = board.make_move(from, to) {
            history.push(undo);
        }
    }

    while let Some(undo) = history.pop() {
        board.unmake(undo);
    }
    assert_eq!(board, initial);
}
