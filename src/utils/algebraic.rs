//! Square conversions for algebraic coordinates.
//!
//! Converts human-readable coordinates (e.g., `e4`) to internal squares for
//! the FEN parser and the move-text parser. The reverse direction is the
//! `Display` impl of `Square`.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    match square.as_bytes() {
        [file, rank] => square_from_bytes(*file, *rank),
        _ => None,
    }
}

/// Convert a file letter byte and rank digit byte to a square.
#[inline]
pub fn square_from_bytes(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Some(Square::new(file - b'a', rank - b'1'))
}
