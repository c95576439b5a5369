//! Immutable position with its legal moves and status.
//!
//! A `Board` is computed once from a `GameState`: legal moves are generated
//! eagerly and the status is classified from them. Playing a move returns a
//! new board; the receiver is never modified, so boards can be shared freely
//! between search threads.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_status::{classify_status, BoardStatus};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    state: GameState,
    legal_moves: Vec<Move>,
    status: BoardStatus,
}

/// Result of playing a legal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub captured: Option<PieceKind>,
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen).map(Self::from_state)
    }

    pub fn from_state(state: GameState) -> Self {
        let mut legal_moves = generate_legal_moves(&state);
        let status = classify_status(&state, !legal_moves.is_empty());
        if status.suppresses_moves() {
            legal_moves.clear();
        }

        Self {
            state,
            legal_moves,
            status,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Legal moves in generation order. Empty once the game is over.
    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Legal moves whose origin is `square`.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        self.legal_moves
            .iter()
            .copied()
            .filter(|mv| mv.from == square)
            .collect()
    }

    #[inline]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    #[inline]
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.state.piece_at(square)
    }

    #[inline]
    pub fn piece_at_side(&self, square: Square, color: Color) -> Option<PieceKind> {
        self.state.piece_at_side(square, color)
    }

    #[inline]
    pub fn castle_rights(&self, color: Color) -> CastleRights {
        self.state.castle_rights(color)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.state.king_square(color)
    }

    /// Plays `mv` if it is in the legal move set.
    pub fn play(&self, mv: Move) -> ChessResult<MoveOutcome> {
        if !self.is_legal(&mv) {
            debug!(%mv, status = ?self.status, "move rejected");
            return Err(ChessError::IllegalMove(mv));
        }
        self.play_unchecked(&mv)
    }

    /// Plays a move already drawn from `legal_moves()`.
    pub(crate) fn play_unchecked(&self, mv: &Move) -> ChessResult<MoveOutcome> {
        let applied = self.state.apply_pseudo_move(mv)?;
        Ok(MoveOutcome {
            board: Self::from_state(applied.state),
            captured: applied.captured,
        })
    }

    /// Plays `moves` in order, stopping at the first illegal one.
    pub fn replay<'a, I>(&self, moves: I) -> ChessResult<Board>
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves
            .into_iter()
            .try_fold(self.clone(), |board, mv| Ok(board.play(*mv)?.board))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
