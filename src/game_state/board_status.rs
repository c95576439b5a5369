//! Game status classification.
//!
//! Precedence: fifty-move rule, then check or checkmate, then stalemate, then
//! insufficient material, then ongoing. The fifty-move draw wins even over a
//! checkmate on the same position; material is only inspected when the side to
//! move is not in check and can move.

use crate::game_state::chess_rules::FIFTY_MOVE_LIMIT;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardStatus {
    Ongoing,
    Check,
    Checkmate,
    DrawByStalemate,
    DrawByFiftyMoveRule,
    DrawByInsufficientMaterial,
}

impl BoardStatus {
    /// True for every status that ends the game.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, BoardStatus::Ongoing | BoardStatus::Check)
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            BoardStatus::DrawByStalemate
                | BoardStatus::DrawByFiftyMoveRule
                | BoardStatus::DrawByInsufficientMaterial
        )
    }

    /// Draw kinds under which the position exposes no legal moves.
    #[inline]
    pub(crate) const fn suppresses_moves(self) -> bool {
        matches!(
            self,
            BoardStatus::DrawByFiftyMoveRule | BoardStatus::DrawByInsufficientMaterial
        )
    }
}

pub fn classify_status(game_state: &GameState, has_legal_moves: bool) -> BoardStatus {
    if game_state.halfmove_clock() >= FIFTY_MOVE_LIMIT {
        return BoardStatus::DrawByFiftyMoveRule;
    }

    if is_king_in_check(game_state, game_state.side_to_move()) {
        return if has_legal_moves {
            BoardStatus::Check
        } else {
            BoardStatus::Checkmate
        };
    }

    if !has_legal_moves {
        return BoardStatus::DrawByStalemate;
    }

    if has_insufficient_material(game_state) {
        BoardStatus::DrawByInsufficientMaterial
    } else {
        BoardStatus::Ongoing
    }
}

/// King versus king, king versus king and one minor piece, or king and bishop
/// versus king and bishop with both bishops on the same square color.
pub fn has_insufficient_material(game_state: &GameState) -> bool {
    let white_count = game_state.piece_count(Color::White);
    let black_count = game_state.piece_count(Color::Black);

    match (white_count, black_count) {
        (1, 1) => true,
        (2, 1) => has_single_minor(game_state, Color::White),
        (1, 2) => has_single_minor(game_state, Color::Black),
        (2, 2) => match (
            lone_bishop(game_state, Color::White),
            lone_bishop(game_state, Color::Black),
        ) {
            (Some(white), Some(black)) => white.is_dark() == black.is_dark(),
            _ => false,
        },
        _ => false,
    }
}

fn has_single_minor(game_state: &GameState, color: Color) -> bool {
    let minors = game_state.pieces(color, PieceKind::Bishop) | game_state.pieces(color, PieceKind::Knight);
    minors.count_ones() == 1
}

fn lone_bishop(game_state: &GameState, color: Color) -> Option<Square> {
    let bishops = game_state.pieces(color, PieceKind::Bishop);
    if bishops.count_ones() == 1 {
        squares_of_mask(bishops).next()
    } else {
        None
    }
}
