//! Knight and king step tables.
//!
//! The offset tables fix the order in which knight and king destinations are
//! generated; the attack bitboards are precomputed from the same offsets and
//! back the attack queries.

/// Knight offsets as `(file_delta, rank_delta)`, clockwise from north-north-east.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King offsets as `(file_delta, rank_delta)`, clockwise from north.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const KNIGHT_ATTACKS: [u64; 64] = generate_step_attacks(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = generate_step_attacks(&KING_OFFSETS);

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_step_attacks(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            attacks |= set_if_valid(file + offsets[i].0, rank + offsets[i].1);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i8, rank: i8) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << (rank as u32 * 8 + file as u32)
}
