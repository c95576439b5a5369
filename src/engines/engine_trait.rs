//! Engine abstraction.
//!
//! Callers ask an engine for the best move of a board at a fixed depth; the
//! board is only read, never modified.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;

pub trait Engine: Send + Sync {
    /// Best legal move for the side to move.
    ///
    /// Fails with `ChessError::NoLegalMoves` when the game is already over.
    fn best_move(&self, board: &Board, depth: u8) -> ChessResult<Move>;
}
