//! Fixed-depth negamax with alpha-beta pruning.
//!
//! Single-threaded; the root driver in `root_parallel` fans out over root moves
//! and calls into this for every subtree.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::board_status::BoardStatus;
use crate::search::board_scoring::BoardScorer;

/// Window bound. `-SCORE_INFINITY` does not overflow.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Root moves evaluated concurrently per batch.
    pub batch_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            batch_size: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: crate::moves::chess_move::Move,
    pub best_score: i32,
    pub nodes: u64,
}

/// Negamax value of `board` for its side to move.
///
/// Leaves are depth 0 or a finished game. A checkmate leaf loses one point per
/// remaining ply, so mates found higher in the tree (sooner) score better for
/// the mating side.
pub fn negamax<S: BoardScorer + ?Sized>(
    board: &Board,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> ChessResult<i32> {
    *nodes += 1;

    let status = board.status();
    if depth == 0 || status.is_over() {
        let mut eval = scorer.score(board);
        if status == BoardStatus::Checkmate {
            eval -= i32::from(depth);
        }
        return Ok(eval);
    }

    let mut best = -SCORE_INFINITY;
    for mv in board.legal_moves() {
        let child = board.play_unchecked(mv)?.board;
        let value = -negamax(&child, scorer, depth - 1, -beta, -alpha, nodes)?;

        best = best.max(value);
        alpha = alpha.max(value);
        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}
