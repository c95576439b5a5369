//! Production engine: batched parallel root over alpha-beta negamax.

use tracing::info;

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{SearchConfig, SearchResult};
use crate::search::board_scoring::{BoardScorer, HeuristicScorer};
use crate::search::root_parallel::search_root;

#[derive(Debug, Clone)]
pub struct AlphaBetaEngine<S = HeuristicScorer> {
    scorer: S,
    batch_size: usize,
}

impl AlphaBetaEngine<HeuristicScorer> {
    pub fn new() -> Self {
        Self::with_scorer(HeuristicScorer)
    }
}

impl Default for AlphaBetaEngine<HeuristicScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            batch_size: SearchConfig::default().batch_size,
        }
    }

    /// Number of root moves searched concurrently. Zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Full search report for `board` at `depth`.
    pub fn search(&self, board: &Board, depth: u8) -> ChessResult<SearchResult> {
        let config = SearchConfig {
            depth,
            batch_size: self.batch_size,
        };
        let result = search_root(board, &self.scorer, config)?;
        info!(
            best_move = %result.best_move,
            score = result.best_score,
            nodes = result.nodes,
            depth,
            "search complete"
        );
        Ok(result)
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn best_move(&self, board: &Board, depth: u8) -> ChessResult<Move> {
        self.search(board, depth).map(|result| result.best_move)
    }
}
