use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::position_view::PositionView;
use crate::moves::chess_move::Move;
use crate::moves::step_moves::KING_OFFSETS;

/// King steps clockwise from north, then king-side castling, then
/// queen-side castling.
pub fn generate_king_moves<P: PositionView + ?Sized>(position: &P, from: Square, out: &mut Vec<Move>) {
    let side = position.side_to_move();

    for (file_delta, rank_delta) in KING_OFFSETS {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        if !position.any_piece_at_side(to, side) {
            out.push(Move::new(from, to));
        }
    }

    let rights = position.castle_rights(side);
    let rank = side.home_rank();
    if from != Square::new(KING_START_FILE, rank) {
        return;
    }

    if rights.has_king_side() && is_castle_path_clear(position, side, rank, &KING_SIDE_KING_PATH) {
        out.push(Move::new(from, Square::new(KING_SIDE_KING_PATH[2], rank)));
    }

    if rights.has_queen_side() && is_castle_path_clear(position, side, rank, &QUEEN_SIDE_KING_PATH) {
        out.push(Move::new(from, Square::new(QUEEN_SIDE_KING_PATH[2], rank)));
    }
}

/// Every square the king stands on or crosses must be empty, apart from the
/// king itself, and not attacked by the opponent. The rook's own path
/// (b-file on the queen side) is not inspected.
fn is_castle_path_clear<P: PositionView + ?Sized>(
    position: &P,
    side: Color,
    rank: u8,
    king_path: &[u8; 3],
) -> bool {
    let enemy = side.opposite();

    king_path.iter().all(|&file| {
        let square = Square::new(file, rank);
        let blocked = position.any_piece_at(square)
            && position.piece_at_side(square, side) != Some(PieceKind::King);
        !blocked && !position.is_square_attacked(square, enemy)
    })
}
