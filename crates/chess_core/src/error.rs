//! Error types for board setup and move input.

use thiserror::Error;

use crate::types::{Color, Move};

/// Why `Board::apply` refused a move. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal move {mv}: {reason}")]
pub struct IllegalMoveError {
    pub mv: Move,
    pub reason: IllegalMoveReason,
}

impl IllegalMoveError {
    pub fn new(mv: Move, reason: IllegalMoveReason) -> Self {
        Self { mv, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("no piece on the source square")]
    EmptySource,
    #[error("piece on the source square belongs to the side not on move")]
    NotSideToMove,
    #[error("the piece cannot move that way")]
    NotPseudoLegal,
    #[error("it leaves the own king in check")]
    LeavesKingInCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN must have at least 4 fields, found {found}")]
    TooFewFields { found: usize },
    #[error("FEN board must have 8 ranks, found {found}")]
    RankCount { found: usize },
    #[error("FEN rank {rank} describes {files} files")]
    RankWidth { rank: u8, files: usize },
    #[error("invalid piece character '{0}' in FEN")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),
    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: u32 },
    #[error("pawn on the first or eighth rank")]
    PawnOnBackRank,
    #[error("{0} is in check but not on move")]
    OpponentInCheck(Color),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square '{0}'")]
pub struct SquareParseError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move '{0}' must be 4 or 5 characters")]
    InvalidLength(String),
    #[error(transparent)]
    InvalidSquare(#[from] SquareParseError),
    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),
    #[error("'{0}' is not a legal move in this position")]
    NotLegal(String),
}
