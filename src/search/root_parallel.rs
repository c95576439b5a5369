//! Batched parallel root search.
//!
//! Root moves are split into contiguous batches in generation order. Each move
//! of a batch is searched on its own scoped thread with the alpha bound known
//! when the batch started; workers report `(index, move, value)` over a
//! channel. Once every worker of the batch has joined, the coordinator folds
//! the reports in index order, then raises alpha for the next batch.

use std::sync::mpsc;
use std::thread;

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{negamax, SearchConfig, SearchResult, SCORE_INFINITY};
use crate::search::board_scoring::BoardScorer;

struct RootReport {
    index: usize,
    mv: Move,
    value: ChessResult<i32>,
    nodes: u64,
}

pub fn search_root<S: BoardScorer + ?Sized>(
    board: &Board,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(ChessError::NoLegalMoves);
    }

    let batch_size = config.batch_size.max(1);
    let child_depth = config.depth.saturating_sub(1);
    let beta = SCORE_INFINITY;
    let mut alpha = -SCORE_INFINITY;
    let mut best: Option<(Move, i32)> = None;
    let mut nodes = 1u64;

    for (batch_index, batch) in moves.chunks(batch_size).enumerate() {
        let reports = run_batch(board, scorer, batch, batch_index * batch_size, child_depth, alpha, beta)?;

        for report in reports {
            nodes += report.nodes;
            let value = report.value?;
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((report.mv, value));
            }
            alpha = alpha.max(value);
        }

        debug!(
            batch = batch_index,
            alpha,
            best = %best.map(|(mv, _)| mv.to_string()).unwrap_or_default(),
            "root batch folded"
        );
    }

    let (best_move, best_score) = best.ok_or(ChessError::NoLegalMoves)?;
    debug!(%best_move, best_score, nodes, depth = config.depth, "root search finished");

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

fn run_batch<S: BoardScorer + ?Sized>(
    board: &Board,
    scorer: &S,
    batch: &[Move],
    first_index: usize,
    child_depth: u8,
    alpha: i32,
    beta: i32,
) -> ChessResult<Vec<RootReport>> {
    let (tx, rx) = mpsc::channel::<RootReport>();

    let joined = thread::scope(|scope| {
        let handles: Vec<_> = batch
            .iter()
            .enumerate()
            .map(|(offset, mv)| {
                let tx = tx.clone();
                scope.spawn(move || {
                    let mut nodes = 0u64;
                    let value = board
                        .play_unchecked(mv)
                        .and_then(|outcome| {
                            negamax(&outcome.board, scorer, child_depth, -beta, -alpha, &mut nodes)
                        })
                        .map(|value| -value);
                    // The receiver outlives the scope.
                    let _ = tx.send(RootReport {
                        index: first_index + offset,
                        mv: *mv,
                        value,
                        nodes,
                    });
                })
            })
            .collect();

        let mut all_joined = true;
        for handle in handles {
            all_joined &= handle.join().is_ok();
        }
        all_joined
    });
    drop(tx);

    if !joined {
        return Err(ChessError::SearchWorkerPanicked);
    }

    let mut reports: Vec<RootReport> = rx.iter().collect();
    reports.sort_by_key(|report| report.index);
    Ok(reports)
}
