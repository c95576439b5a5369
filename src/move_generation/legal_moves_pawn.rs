use crate::game_state::chess_types::*;
use crate::move_generation::position_view::PositionView;
use crate::moves::chess_move::Move;

/// Pawn moves from `from`: single push, double push, captures toward the
/// lower file then the higher file, then en passant. Moves landing on the
/// promotion rank expand to Queen, Rook, Bishop, Knight.
pub fn generate_pawn_moves<P: PositionView + ?Sized>(position: &P, from: Square, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    let enemy = side.opposite();
    let direction = side.pawn_direction();

    if let Some(one_step) = from.offset(0, direction) {
        if !position.any_piece_at(one_step) {
            push_pawn_move(side, from, one_step, out);

            if from.rank() == side.pawn_rank() {
                if let Some(two_step) = from.offset(0, 2 * direction) {
                    if !position.any_piece_at(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(file_delta, direction) {
            if position.any_piece_at_side(to, enemy) {
                push_pawn_move(side, from, to, out);
            }
        }
    }

    if let Some(target) = position.en_passant_square() {
        for file_delta in [-1, 1] {
            if from.offset(file_delta, direction) == Some(target) {
                out.push(Move::new(from, target));
            }
        }
    }
}

fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.rank() == side.promotion_rank() {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::with_promotion(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::move_generation::position_view::stub::{square_of, StubPosition};
    use crate::moves::chess_move::Move;

    fn moves_from(position: &StubPosition, square: &str) -> Vec<String> {
        let mut out = Vec::new();
        generate_pawn_moves(position, square_of(square), &mut out);
        out.iter().map(Move::to_string).collect()
    }

    #[test]
    fn home_rank_pawn_pushes_once_and_twice() {
        let position = StubPosition::new(Color::White).with("e2", Color::White, PieceKind::Pawn);
        assert_eq!(moves_from(&position, "e2"), vec!["e2-e3", "e2-e4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let position = StubPosition::new(Color::Black)
            .with("d7", Color::Black, PieceKind::Pawn)
            .with("d6", Color::White, PieceKind::Knight);
        assert!(moves_from(&position, "d7").is_empty());

        let position = StubPosition::new(Color::Black)
            .with("d7", Color::Black, PieceKind::Pawn)
            .with("d5", Color::White, PieceKind::Knight);
        assert_eq!(moves_from(&position, "d7"), vec!["d7-d6"]);
    }

    #[test]
    fn captures_only_enemy_pieces() {
        let position = StubPosition::new(Color::White)
            .with("e4", Color::White, PieceKind::Pawn)
            .with("d5", Color::Black, PieceKind::Rook)
            .with("f5", Color::White, PieceKind::Rook);
        assert_eq!(moves_from(&position, "e4"), vec!["e4-e5", "e4-d5"]);
    }

    #[test]
    fn promotion_expands_in_fixed_order() {
        let position = StubPosition::new(Color::White)
            .with("b7", Color::White, PieceKind::Pawn)
            .with("a8", Color::Black, PieceKind::Bishop);
        assert_eq!(
            moves_from(&position, "b7"),
            vec!["b7-b8Q", "b7-b8R", "b7-b8B", "b7-b8N", "b7-a8Q", "b7-a8R", "b7-a8B", "b7-a8N"]
        );
    }

    #[test]
    fn en_passant_targets_adjacent_file_only() {
        let mut position = StubPosition::new(Color::Black)
            .with("c4", Color::Black, PieceKind::Pawn)
            .with("d4", Color::White, PieceKind::Pawn);
        position.en_passant = Some(square_of("d3"));
        assert_eq!(moves_from(&position, "c4"), vec!["c4-c3", "c4-d3"]);

        position.en_passant = Some(square_of("f3"));
        assert_eq!(moves_from(&position, "c4"), vec!["c4-c3"]);
    }
}
