use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{bishop_attacks, rook_attacks};
use crate::moves::step_moves::{king_attacks, knight_attacks};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// True when any piece of `attacker_color` attacks `square`.
///
/// Pawns attack diagonally forward only; sliders are blocked by the first
/// occupied square; the attacker's own king counts.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let sq = square.index();
    let attackers = |kind: PieceKind| game_state.pieces(attacker_color, kind);

    // A pawn attacks `sq` exactly when it stands where an opposite-color pawn
    // on `sq` would attack.
    if pawn_attacks(attacker_color.opposite(), sq) & attackers(PieceKind::Pawn) != 0 {
        return true;
    }

    if knight_attacks(sq) & attackers(PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(sq) & attackers(PieceKind::King) != 0 {
        return true;
    }

    let occupancy = game_state.occupancy_all();
    let bishops_queens = attackers(PieceKind::Bishop) | attackers(PieceKind::Queen);
    if bishop_attacks(sq, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = attackers(PieceKind::Rook) | attackers(PieceKind::Queen);
    rook_attacks(sq, occupancy) & rooks_queens != 0
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    fn sq(text: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(text).expect("valid square")
    }

    #[test]
    fn start_position_attacks() {
        let state = GameState::new_game();
        assert!(is_square_attacked(&state, sq("e3"), Color::White));
        assert!(is_square_attacked(&state, sq("f3"), Color::White));
        assert!(!is_square_attacked(&state, sq("e4"), Color::White));
        assert!(is_square_attacked(&state, sq("c6"), Color::Black));
        assert!(!is_king_in_check(&state, Color::White));
    }

    #[test]
    fn pawns_attack_forward_only() {
        let state = parse_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("valid fen");
        assert!(is_square_attacked(&state, sq("d5"), Color::White));
        assert!(is_square_attacked(&state, sq("f5"), Color::White));
        assert!(!is_square_attacked(&state, sq("d3"), Color::White));
        assert!(!is_square_attacked(&state, sq("e5"), Color::White));
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let state = parse_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1").expect("valid fen");
        assert!(is_square_attacked(&state, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&state, sq("e4"), Color::Black));
        assert!(!is_king_in_check(&state, Color::White));

        let state = parse_fen("4k3/8/8/8/r6K/8/8/8 w - - 0 1").expect("valid fen");
        assert!(is_king_in_check(&state, Color::White));
    }

    #[test]
    fn king_attacks_adjacent_squares() {
        let state = parse_fen("8/8/8/3k4/8/8/8/K7 w - - 0 1").expect("valid fen");
        assert!(is_square_attacked(&state, sq("e6"), Color::Black));
        assert!(is_square_attacked(&state, sq("c4"), Color::Black));
        assert!(!is_square_attacked(&state, sq("d3"), Color::Black));
    }
}
