use crate::game_state::chess_types::*;
use crate::move_generation::position_view::PositionView;
use crate::moves::chess_move::Move;
use crate::moves::step_moves::KNIGHT_OFFSETS;

pub fn generate_knight_moves<P: PositionView + ?Sized>(position: &P, from: Square, out: &mut Vec<Move>) {
    let side = position.side_to_move();

    for (file_delta, rank_delta) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        if !position.any_piece_at_side(to, side) {
            out.push(Move::new(from, to));
        }
    }
}
