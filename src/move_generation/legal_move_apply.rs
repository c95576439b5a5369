//! Move application.
//!
//! `apply_move` executes a pseudo-legal move on a copy of the position and
//! rejects it when the mover's king is left attacked. This is the single
//! legality gate used by move generation, `Board::play` and search.

use tracing::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::chess_move::Move;

/// Successor position plus the kind of piece the move removed, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub state: GameState,
    pub captured: Option<PieceKind>,
}

pub fn apply_move(game_state: &GameState, mv: &Move) -> ChessResult<AppliedMove> {
    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();

    let moved_piece = game_state
        .piece_at_side(mv.from, moving_color)
        .ok_or(ChessError::EmptySquare(mv.from))?;
    let mut captured = game_state.piece_at_side(mv.to, enemy_color);

    let mut next = game_state.clone();
    next.clear_square(mv.from);
    next.put_piece(mv.to, moving_color, moved_piece);

    if moved_piece == PieceKind::Pawn {
        // A diagonal step onto the empty en-passant target takes the pawn
        // that just double-stepped past it.
        if captured.is_none() && game_state.en_passant_square == Some(mv.to) {
            if let Some(taken) = mv.to.offset(0, enemy_color.pawn_direction()) {
                next.clear_square(taken);
                captured = Some(PieceKind::Pawn);
            }
        }

        if mv.to.rank() == moving_color.promotion_rank() {
            let promotion = mv.promotion_or_queen();
            if !promotion.is_valid_promotion() {
                return Err(ChessError::InvalidPromotion(promotion));
            }
            next.put_piece(mv.to, moving_color, promotion);
        }
    }

    if moved_piece == PieceKind::King {
        let rank = mv.from.rank();
        match mv.to.file() as i8 - mv.from.file() as i8 {
            2 => move_rook(
                &mut next,
                moving_color,
                Square::new(KING_SIDE_ROOK_FILE, rank),
                Square::new(KING_SIDE_ROOK_DESTINATION_FILE, rank),
            ),
            -2 => move_rook(
                &mut next,
                moving_color,
                Square::new(QUEEN_SIDE_ROOK_FILE, rank),
                Square::new(QUEEN_SIDE_ROOK_DESTINATION_FILE, rank),
            ),
            _ => {}
        }
    }

    update_castle_rights(&mut next, mv, moving_color, moved_piece, captured);

    next.en_passant_square = if moved_piece == PieceKind::Pawn
        && mv.from.rank().abs_diff(mv.to.rank()) == 2
    {
        mv.from.offset(0, moving_color.pawn_direction())
    } else {
        None
    };

    if moved_piece == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.side_to_move = enemy_color;
    next.recalc_occupancy();

    if is_king_in_check(&next, moving_color) {
        trace!(%mv, "rejected: king left in check");
        return Err(ChessError::KingLeftInCheck(*mv));
    }

    Ok(AppliedMove {
        state: next,
        captured,
    })
}

fn move_rook(game_state: &mut GameState, color: Color, from: Square, to: Square) {
    if game_state.pieces(color, PieceKind::Rook) & from.mask() == 0 {
        return;
    }
    game_state.clear_square(from);
    game_state.put_piece(to, color, PieceKind::Rook);
}

// Each trigger strips rights on its own; a rook moving from its home square
// and a rook captured on its home square can both apply in one move.
fn update_castle_rights(
    game_state: &mut GameState,
    mv: &Move,
    moving_color: Color,
    moved_piece: PieceKind,
    captured: Option<PieceKind>,
) {
    let own = moving_color.index();
    if moved_piece == PieceKind::King {
        game_state.castle_rights[own] = CastleRights::NoRights;
    }

    if moved_piece == PieceKind::Rook && mv.from.rank() == moving_color.home_rank() {
        game_state.castle_rights[own] = strip_rook_side(game_state.castle_rights[own], mv.from);
    }

    let enemy_color = moving_color.opposite();
    if captured == Some(PieceKind::Rook) && mv.to.rank() == enemy_color.home_rank() {
        let enemy = enemy_color.index();
        game_state.castle_rights[enemy] = strip_rook_side(game_state.castle_rights[enemy], mv.to);
    }
}

fn strip_rook_side(rights: CastleRights, rook_square: Square) -> CastleRights {
    match rook_square.file() {
        QUEEN_SIDE_ROOK_FILE => rights.without_queen_side(),
        KING_SIDE_ROOK_FILE => rights.without_king_side(),
        _ => rights,
    }
}
