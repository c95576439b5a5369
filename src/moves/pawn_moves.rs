//! Pawn capture tables.
//!
//! `pawn_attacks(color, sq)` is the set of squares a pawn of `color` standing
//! on `sq` attacks. Reading it with the opposite color gives the squares a
//! pawn must stand on to attack `sq`.

use crate::game_state::chess_types::Color;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(direction: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32 + direction;
        let mut attacks = 0u64;

        if rank >= 0 && rank < 8 {
            if file > 0 {
                attacks |= 1u64 << (rank * 8 + file - 1);
            }
            if file < 7 {
                attacks |= 1u64 << (rank * 8 + file + 1);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
    use crate::game_state::chess_types::Color;

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = 12u8;
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(WHITE_PAWN_ATTACKS[e2 as usize], expected);
        assert_eq!(pawn_attacks(Color::White, e2), expected);
    }

    #[test]
    fn black_pawn_attacks_from_a7() {
        let a7 = 48u8;
        assert_eq!(BLACK_PAWN_ATTACKS[a7 as usize], 1u64 << 41);
        assert_eq!(pawn_attacks(Color::Black, 7), 0);
    }
}
