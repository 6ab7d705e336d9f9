//! Error types for board and match operations.

use std::fmt;

use super::{CastleSide, Color};

/// Error type for coordinate construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// File outside `a`..=`h`
    FileOutOfBounds { file: char },
    /// Rank outside 1..=8
    RankOutOfBounds { rank: u8 },
    /// Not a two-character file/rank pair
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::FileOutOfBounds { file } => {
                write!(f, "File '{file}' out of bounds (must be a-h)")
            }
            PositionError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Normalized move text is not four characters
    InvalidLength { len: usize },
    /// Normalized move text does not hold exactly two rank digits
    MissingDigits { notation: String },
    /// One of the two squares is off the board
    InvalidSquare { source: PositionError },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            NotationError::MissingDigits { notation } => {
                write!(f, "Move '{notation}' must contain two rank digits")
            }
            NotationError::InvalidSquare { source } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::InvalidSquare { source } => Some(source),
            _ => None,
        }
    }
}

impl From<PositionError> for NotationError {
    fn from(source: PositionError) -> Self {
        NotationError::InvalidSquare { source }
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs placement and side to move)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Placement field does not describe eight ranks
    RankCount { found: usize },
    /// A rank does not describe exactly eight files
    BadFileCount { rank: usize, files: usize },
    /// Each side needs exactly one king
    KingCount { color: Color, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::RankCount { found } => {
                write!(f, "Expected 8 ranks in FEN, found {found}")
            }
            FenError::BadFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a move was refused. A refused move never changes the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the source square
    EmptySource,
    /// The piece on the source square belongs to the side not on move
    NotYourTurn { side_to_move: Color },
    /// The target holds a piece of the mover's own color
    OwnPieceOnTarget,
    /// The piece cannot travel that way, or its path is blocked
    IllegalGeometry,
    /// King or rook has already moved, or the rook is missing
    CastlingNotAllowed { side: CastleSide },
    /// A square between king and rook is occupied
    CastlingPathBlocked { side: CastleSide },
    /// The king starts on, passes through or lands on an attacked square
    CastlingThroughCheck { side: CastleSide },
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource => write!(f, "No piece on the source square"),
            MoveError::NotYourTurn { side_to_move } => {
                write!(f, "It is {side_to_move}'s turn")
            }
            MoveError::OwnPieceOnTarget => write!(f, "Target square holds a friendly piece"),
            MoveError::IllegalGeometry => write!(f, "Piece cannot move that way"),
            MoveError::CastlingNotAllowed { side } => {
                write!(f, "Castling {side} not allowed: king or rook has moved")
            }
            MoveError::CastlingPathBlocked { side } => {
                write!(f, "Castling {side} blocked by a piece")
            }
            MoveError::CastlingThroughCheck { side } => {
                write!(f, "Castling {side} through an attacked square")
            }
            MoveError::LeavesKingInCheck => write!(f, "Move leaves own king in check"),
        }
    }
}

impl std::error::Error for MoveError {}
