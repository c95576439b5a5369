//! Full legal move generation pipeline.
//!
//! Scans squares a1..h8, collects pseudo-legal moves for each piece of the
//! side to move, then keeps only the moves the application gate accepts.

use tracing::trace;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::position_view::PositionView;
use crate::moves::chess_move::Move;

/// Pseudo-legal moves of the side to move. Self-check is not considered.
pub fn generate_pseudo_moves<P: PositionView + ?Sized>(position: &P) -> Vec<Move> {
    let side = position.side_to_move();
    let mut out = Vec::with_capacity(64);

    for square in Square::all() {
        let Some(kind) = position.piece_at_side(square, side) else {
            continue;
        };
        match kind {
            PieceKind::Pawn => generate_pawn_moves(position, square, &mut out),
            PieceKind::Knight => generate_knight_moves(position, square, &mut out),
            PieceKind::Bishop => generate_bishop_moves(position, square, &mut out),
            PieceKind::Rook => generate_rook_moves(position, square, &mut out),
            PieceKind::Queen => generate_queen_moves(position, square, &mut out),
            PieceKind::King => generate_king_moves(position, square, &mut out),
        }
    }

    out
}

/// Legal moves of the side to move, in generation order.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    generate_pseudo_moves(game_state)
        .into_iter()
        .filter(|mv| match game_state.apply_pseudo_move(mv) {
            Ok(_) => true,
            Err(err) => {
                trace!(%mv, %err, "pseudo-legal move filtered");
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, generate_pseudo_moves};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::position_view::stub::StubPosition;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_position_has_twenty_moves_in_square_order() {
        let moves = generate_legal_moves(&GameState::new_game());
        assert_eq!(moves.len(), 20);

        let text: Vec<String> = moves.iter().take(4).map(Move::to_string).collect();
        assert_eq!(text, vec!["b1-c3", "b1-a3", "g1-h3", "g1-f3"]);
    }

    #[test]
    fn pseudo_generation_ignores_pins() {
        let state = parse_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").expect("valid fen");
        let pseudo = generate_pseudo_moves(&state);
        let legal = generate_legal_moves(&state);

        assert!(pseudo.iter().any(|mv| mv.from == Square::new(4, 1)));
        assert!(legal.iter().all(|mv| mv.from != Square::new(4, 1)));
    }

    #[test]
    fn generation_reads_only_the_view() {
        let position = StubPosition::new(Color::Black)
            .with("a8", Color::Black, PieceKind::King)
            .with("h1", Color::White, PieceKind::King);
        let moves = generate_pseudo_moves(&position);
        let text: Vec<String> = moves.iter().map(Move::to_string).collect();

        assert_eq!(text, vec!["a8-b8", "a8-b7", "a8-a7"]);
    }
}
