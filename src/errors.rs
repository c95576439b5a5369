//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type returned by move application, FEN
//! parsing, move-text parsing and search.
//!
//! - `IllegalMove`, `KingLeftInCheck`, `InvalidNotation` and `InvalidMoveText`
//!   are recoverable: callers reject the input and ask again.
//! - `InvalidPromotion` and `EmptySquare` come from malformed move records and
//!   indicate a caller bug when they surface from validated paths.
//! - `NoLegalMoves` is returned by search on terminal positions; callers are
//!   expected to check the board status first.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::chess_move::Move;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The move is not in the legal move set of the position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// The move is pseudo-legal but leaves the mover's king attacked.
    #[error("move {0} leaves the king in check")]
    KingLeftInCheck(Move),

    /// Any structural or range violation in a FEN string.
    #[error("invalid fen")]
    InvalidNotation,

    /// Text that does not match `[a-h][1-8]-[a-h][1-8][KQRBNP]?`.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// Promotion to a King or Pawn.
    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(PieceKind),

    /// The move starts on a square without a piece of the side to move.
    #[error("no piece of the side to move on {0}")]
    EmptySquare(Square),

    /// Search was asked for a move in a terminal position.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A root search worker thread panicked.
    #[error("search worker thread panicked")]
    SearchWorkerPanicked,
}
