//! Match orchestration: turn order, move legality, check and mate.
//!
//! A [`Match`] owns its board exclusively. Every call runs to completion
//! synchronously; hosts serving several games serialize access per match
//! (see [`crate::sync::SharedMatch`]).
//!
//! # Example
//! ```
//! use chess_match::game::Match;
//! use chess_match::board::Color;
//!
//! let mut game = Match::new();
//! let outcome = game.attempt_move("e2".parse().unwrap(), "e4".parse().unwrap());
//! assert!(outcome.is_ok());
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod castling;
mod check;
mod config;
mod outcome;
mod players;

#[cfg(test)]
mod tests;

use rand::Rng;

use crate::board::{
    Applied, Board, CastleSide, Color, FenError, MoveError, PieceKind, Position, UndoRecord,
};
use crate::trace::{debug_log, info_log, trace_log};

pub use config::{ColorAssignment, MatchConfig};
pub use outcome::MoveOutcome;
pub use players::Players;

/// A move that passed every legality check and is on the board.
///
/// Holds what is needed to take it back exactly.
struct Committed {
    undo: UndoRecord,
    applied: Applied,
    castled: Option<CastleSide>,
    previous_castle: Option<CastleSide>,
}

/// One game between two players.
#[derive(Clone, Debug)]
pub struct Match {
    board: Board,
    side_to_move: Color,
    players: Players,
    config: MatchConfig,
    last_castle: Option<CastleSide>,
}

impl Match {
    /// A match from the initial array with placeholder players.
    #[must_use]
    pub fn new() -> Self {
        Match::from_board(
            Board::new(),
            Color::White,
            Players::anonymous(),
            Match::anonymous_config(),
        )
    }

    /// Config matching [`Players::anonymous`]: the first player is White.
    fn anonymous_config() -> MatchConfig {
        MatchConfig::default().with_colors(ColorAssignment::Fixed(Color::White))
    }

    /// A match between two named players; colors follow `config.colors`.
    pub fn with_players(
        first: impl Into<String>,
        second: impl Into<String>,
        config: MatchConfig,
    ) -> Self {
        Match::with_players_rng(first, second, config, &mut rand::thread_rng())
    }

    /// Like [`Match::with_players`], drawing colors from `rng`.
    pub fn with_players_rng<R: Rng + ?Sized>(
        first: impl Into<String>,
        second: impl Into<String>,
        config: MatchConfig,
        rng: &mut R,
    ) -> Self {
        let players = Players::assign(first, second, config.colors, rng);
        debug_log!(
            "new match: {} plays {}, {} plays {}",
            players.first(),
            players.first_color(),
            players.second(),
            players.second_color()
        );
        Match::from_board(Board::new(), Color::White, players, config)
    }

    /// A match continuing from an arbitrary board.
    #[must_use]
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        players: Players,
        config: MatchConfig,
    ) -> Self {
        Match {
            board,
            side_to_move,
            players,
            config,
            last_castle: None,
        }
    }

    /// A match set up from FEN placement, side and castling fields.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, side_to_move) = Board::try_from_fen(fen)?;
        Ok(Match::from_board(
            board,
            side_to_move,
            Players::anonymous(),
            Match::anonymous_config(),
        ))
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.side_to_move)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Color played by `player`, if they take part in this match.
    #[must_use]
    pub fn color_of(&self, player: &str) -> Option<Color> {
        self.players.color_of(player)
    }

    /// Identity of the player whose turn it is.
    #[must_use]
    pub fn player_to_move(&self) -> &str {
        self.players.player(self.side_to_move)
    }

    /// The other participant, if `player` takes part in this match.
    #[must_use]
    pub fn opponent_of(&self, player: &str) -> Option<&str> {
        let color = self.players.color_of(player)?;
        Some(self.players.player(color.opponent()))
    }

    /// True if the last committed move was a king-side castle.
    #[must_use]
    pub fn just_castled_king_side(&self) -> bool {
        self.last_castle == Some(CastleSide::KingSide)
    }

    /// True if the last committed move was a queen-side castle.
    #[must_use]
    pub fn just_castled_queen_side(&self) -> bool {
        self.last_castle == Some(CastleSide::QueenSide)
    }

    /// Forget the castle flag after it has been reported.
    pub fn clear_castle_flags(&mut self) {
        self.last_castle = None;
    }

    /// Play `from` → `to` for the side to move.
    ///
    /// On success the board holds the move, the turn has passed and the
    /// outcome reports capture, castle, promotion, check and mate. On error
    /// nothing about the match has changed.
    pub fn attempt_move(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<MoveOutcome, MoveError> {
        let color = self.side_to_move;
        let committed = self.execute(from, to).map_err(|err| {
            trace_log!("rejected {from}{to} for {color}: {err}");
            err
        })?;

        let opponent = color.opponent();
        let checks = self.is_in_check();
        let is_mate =
            self.config.report_mate && checks == Some(opponent) && self.is_checkmate(opponent);

        let outcome = MoveOutcome {
            from,
            to,
            color,
            moved: committed.applied.moved,
            captured: committed.applied.captured,
            castled: committed.castled,
            promoted: committed.applied.promoted,
            checks,
            is_mate,
        };
        debug_log!("{color} played {from}{to}: {outcome:?}");
        if is_mate {
            info_log!("{color} mates {opponent}");
        }
        Ok(outcome)
    }

    /// The single legality path shared by play and the mate search.
    ///
    /// Ownership, target occupancy and geometry are checked before the board
    /// is touched; self-check is checked on the tentative board and undone on
    /// failure. On success the turn has been handed over.
    fn execute(&mut self, from: Position, to: Position) -> Result<Committed, MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySource)?;
        let mover = piece.color;
        if mover != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                side_to_move: self.side_to_move,
            });
        }
        if self.board.color_on(to) == Some(mover) {
            return Err(MoveError::OwnPieceOnTarget);
        }

        let (d_row, d_column) = from.delta(to);
        let castle = match piece.kind {
            PieceKind::King if d_row == 0 => CastleSide::from_king_step(d_column),
            _ => None,
        };

        let (applied, undo) = match castle {
            Some(side) => {
                let undo = self.castle(from, side)?;
                let applied = Applied {
                    moved: PieceKind::King,
                    captured: None,
                    promoted: false,
                };
                (applied, undo)
            }
            None => {
                if !piece.can_reach(from, to, &self.board) {
                    return Err(MoveError::IllegalGeometry);
                }
                let (applied, undo) = self
                    .board
                    .make_move(from, to)
                    .ok_or(MoveError::EmptySource)?;
                if self.check_status(mover) == Some(mover) {
                    self.board.unmake(undo);
                    return Err(MoveError::LeavesKingInCheck);
                }
                (applied, undo)
            }
        };

        let previous_castle = std::mem::replace(&mut self.last_castle, castle);
        self.side_to_move = mover.opponent();
        Ok(Committed {
            undo,
            applied,
            castled: castle,
            previous_castle,
        })
    }

    /// Take back a move returned by [`Match::execute`].
    fn rollback(&mut self, committed: Committed) {
        self.board.unmake(committed.undo);
        self.side_to_move = self.side_to_move.opponent();
        self.last_castle = committed.previous_castle;
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
