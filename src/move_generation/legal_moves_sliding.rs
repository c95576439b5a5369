use crate::game_state::chess_types::*;
use crate::move_generation::position_view::PositionView;
use crate::moves::chess_move::Move;
use crate::moves::sliding_moves::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

pub fn generate_rook_moves<P: PositionView + ?Sized>(position: &P, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(position, from, &ROOK_DIRECTIONS, out);
}

pub fn generate_bishop_moves<P: PositionView + ?Sized>(position: &P, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(position, from, &BISHOP_DIRECTIONS, out);
}

pub fn generate_queen_moves<P: PositionView + ?Sized>(position: &P, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(position, from, &ROOK_DIRECTIONS, out);
    generate_ray_moves(position, from, &BISHOP_DIRECTIONS, out);
}

/// Walks each ray until the board edge or a piece; an enemy piece ends the ray
/// as a capture, an own piece ends it before the square.
fn generate_ray_moves<P: PositionView + ?Sized>(
    position: &P,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let side = position.side_to_move();
    let enemy = side.opposite();

    for &(file_step, rank_step) in directions {
        let mut current = from;
        while let Some(to) = current.offset(file_step, rank_step) {
            if position.any_piece_at_side(to, side) {
                break;
            }
            out.push(Move::new(from, to));
            if position.any_piece_at_side(to, enemy) {
                break;
            }
            current = to;
        }
    }
}
