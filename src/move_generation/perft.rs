//! Move-path enumeration for validating generation.
//!
//! Counts leaf nodes and leaf move kinds at a fixed depth. Counts at standard
//! positions are well known, so any rule bug in generation or application
//! shows up as a mismatch.

use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_status::BoardStatus;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in board.legal_moves() {
        perft_recurse(board, mv, depth, &mut total)?;
    }

    Ok(total)
}

/// Same counts as [`perft`], one scoped worker per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return perft(board, depth);
    }

    thread::scope(|scope| -> ChessResult<PerftCounts> {
        let handles: Vec<_> = board
            .legal_moves()
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(board, mv, depth, &mut local).map(|()| local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle.join().map_err(|_| ChessError::SearchWorkerPanicked)??;
            total.merge(local);
        }
        Ok(total)
    })
}

/// Leaf node count under each root move, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> ChessResult<Vec<(Move, usize)>> {
    let mut divided = Vec::with_capacity(board.legal_moves().len());
    for mv in board.legal_moves() {
        let mut counts = PerftCounts::default();
        if depth > 0 {
            perft_recurse(board, mv, depth, &mut counts)?;
        }
        divided.push((*mv, counts.nodes));
    }
    Ok(divided)
}

fn perft_recurse(
    parent: &Board,
    mv: &Move,
    remaining_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let outcome = parent.play_unchecked(mv)?;

    if remaining_depth == 1 {
        counts.nodes += 1;
        tally_leaf(parent, mv, &outcome.board, outcome.captured, counts);
        return Ok(());
    }

    for child in outcome.board.legal_moves() {
        perft_recurse(&outcome.board, child, remaining_depth - 1, counts)?;
    }

    Ok(())
}

fn tally_leaf(
    parent: &Board,
    mv: &Move,
    child: &Board,
    captured: Option<PieceKind>,
    counts: &mut PerftCounts,
) {
    let mover = parent.side_to_move();
    let moved = parent.piece_at_side(mv.from, mover);

    if captured.is_some() {
        counts.captures += 1;
    }
    if moved == Some(PieceKind::Pawn) && mv.from.file() != mv.to.file() && parent.piece_at(mv.to).is_none() {
        counts.en_passant += 1;
    }
    if moved == Some(PieceKind::King) && mv.from.file().abs_diff(mv.to.file()) == 2 {
        counts.castles += 1;
    }
    if moved == Some(PieceKind::Pawn) && mv.to.rank() == mover.promotion_rank() {
        counts.promotions += 1;
    }
    match child.status() {
        BoardStatus::Check => counts.checks += 1,
        BoardStatus::Checkmate => {
            counts.checks += 1;
            counts.checkmates += 1;
        }
        _ => {}
    }
}
