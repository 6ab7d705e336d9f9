//! Move attempt tests.

use super::{assert_rejected, from_fen, play, play_all, sq, try_play};
use crate::board::{Color, MoveError, PieceKind, Position};
use crate::game::{ColorAssignment, Match};

#[test]
fn test_opening_pawn_push() {
    let mut game = Match::new();
    assert_eq!(game.side_to_move(), Color::White);

    let outcome = play(&mut game, "e2e4");
    assert_eq!(outcome.color, Color::White);
    assert_eq!(outcome.moved, PieceKind::Pawn);
    assert_eq!(outcome.captured, None);
    assert_eq!(outcome.castled, None);
    assert!(!outcome.promoted);
    assert_eq!(outcome.checks, None);
    assert!(!outcome.is_mate);

    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game.board().is_empty(sq("e2")));
    assert_eq!(
        game.board().piece_at(sq("e4")).map(|p| (p.kind, p.color)),
        Some((PieceKind::Pawn, Color::White))
    );
}

#[test]
fn test_wrong_side_rejected() {
    let mut game = Match::new();
    assert_rejected(
        &mut game,
        "e7e5",
        MoveError::NotYourTurn {
            side_to_move: Color::White,
        },
    );
}

#[test]
fn test_empty_source_rejected() {
    let mut game = Match::new();
    assert_rejected(&mut game, "e4e5", MoveError::EmptySource);
}

#[test]
fn test_own_piece_on_target_rejected() {
    let mut game = Match::new();
    assert_rejected(&mut game, "a1a2", MoveError::OwnPieceOnTarget);
    assert_rejected(&mut game, "d1e1", MoveError::OwnPieceOnTarget);
}

#[test]
fn test_bad_geometry_rejected() {
    let mut game = Match::new();
    assert_rejected(&mut game, "e2e5", MoveError::IllegalGeometry);
    assert_rejected(&mut game, "b1b3", MoveError::IllegalGeometry);
    assert_rejected(&mut game, "f1c4", MoveError::IllegalGeometry);
}

#[test]
fn test_pinned_piece_cannot_expose_king() {
    let mut game = from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w -");
    let bishop = game.board().piece_at(sq("e2")).expect("bishop on e2");
    assert!(bishop.can_reach(sq("e2"), sq("d3"), game.board()));
    assert_rejected(&mut game, "e2d3", MoveError::LeavesKingInCheck);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut game = from_fen("4k3/8/8/8/8/8/3r4/4K3 w -");
    assert_rejected(&mut game, "e1e2", MoveError::LeavesKingInCheck);
    assert_rejected(&mut game, "e1d1", MoveError::LeavesKingInCheck);
    let outcome = play(&mut game, "e1d2");
    assert_eq!(outcome.captured, Some(PieceKind::Rook));
}

#[test]
fn test_must_answer_check() {
    let mut game = Match::new();
    play_all(&mut game, &["e2e4", "f7f5", "d1h5"]);
    assert_eq!(game.is_in_check(), Some(Color::Black));
    assert_rejected(&mut game, "a7a6", MoveError::LeavesKingInCheck);
    play(&mut game, "g7g6");
    assert_eq!(game.is_in_check(), None);
}

#[test]
fn test_capture_reported() {
    let mut game = Match::new();
    play_all(&mut game, &["e2e4", "d7d5"]);
    let outcome = play(&mut game, "e4d5");
    assert_eq!(outcome.captured, Some(PieceKind::Pawn));
    assert_eq!(game.board().pieces_of(Color::Black).count(), 15);
}

#[test]
fn test_white_promotes_to_queen_with_check() {
    let mut game = from_fen("4k3/P7/8/8/8/8/8/4K3 w -");
    let outcome = play(&mut game, "a7a8");
    assert!(outcome.promoted);
    assert_eq!(outcome.moved, PieceKind::Pawn);
    let queen = game.board().piece_at(sq("a8")).expect("queen on a8");
    assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::White));
    assert_eq!(outcome.checks, Some(Color::Black));
    assert!(!outcome.is_mate);
}

#[test]
fn test_black_promotes_on_rank_one() {
    let mut game = from_fen("4k3/8/8/8/8/8/7p/K7 b -");
    let outcome = play(&mut game, "h2h1");
    assert!(outcome.promoted);
    let queen = game.board().piece_at(sq("h1")).expect("queen on h1");
    assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Black));
    assert_eq!(outcome.checks, Some(Color::White));
}

#[test]
fn test_illegal_attempts_are_idempotent() {
    let mut game = Match::new();
    for _ in 0..3 {
        assert_rejected(&mut game, "e2e5", MoveError::IllegalGeometry);
    }
    play(&mut game, "e2e4");
    assert_eq!(
        try_play(&mut game, "e2e4"),
        Err(MoveError::EmptySource),
        "the same move is evaluated against the new state"
    );
}

#[test]
fn test_only_the_two_squares_change() {
    let mut game = Match::new();
    play(&mut game, "g1f3");
    let before = game.board().clone();
    play(&mut game, "b8c6");
    let changed: Vec<Position> = Position::all()
        .filter(|&pos| before.piece_at(pos) != game.board().piece_at(pos))
        .collect();
    assert_eq!(changed, vec![sq("b8"), sq("c6")]);
}

#[test]
fn test_turns_alternate() {
    let mut game = Match::new();
    let outcomes = play_all(&mut game, &["d2d4", "d7d5", "c2c4", "e7e6", "b1c3"]);
    let colors: Vec<Color> = outcomes.iter().map(|o| o.color).collect();
    assert_eq!(
        colors,
        [Color::White, Color::Black, Color::White, Color::Black, Color::White]
    );
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_anonymous_matches_record_fixed_colors() {
    let fixed = ColorAssignment::Fixed(Color::White);
    let fresh = Match::new();
    assert_eq!(fresh.config().colors, fixed);
    assert_eq!(fresh.players().first_color(), Color::White);
    assert_eq!(fresh.player_to_move(), "white");

    let loaded = from_fen("4k3/8/8/8/8/8/8/4K3 b -");
    assert_eq!(loaded.config().colors, fixed);
    assert_eq!(loaded.player_to_move(), "black");
}
