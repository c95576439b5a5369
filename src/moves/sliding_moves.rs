//! Rook, bishop and queen rays.
//!
//! Direction tables fix generation order: rooks scan up, down, right, left;
//! bishops scan up-right, down-right, up-left, down-left; queens do both, rook
//! directions first.

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

/// Squares reached from `square` stepping `(file_step, rank_step)`, up to and
/// including the first occupied square.
pub fn trace_ray(square: u8, file_step: i8, rank_step: i8, occupancy: u64) -> u64 {
    let mut file = (square % 8) as i8 + file_step;
    let mut rank = (square / 8) as i8 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}
