//! Canonical chess-rule constants.
//!
//! Static rule literals: the starting position, the draw-rule thresholds and
//! the files the king and rooks use when castling.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u8 = 50;

pub const KING_START_FILE: u8 = 4;
pub const KING_SIDE_ROOK_FILE: u8 = 7;
pub const QUEEN_SIDE_ROOK_FILE: u8 = 0;

/// Files the king stands on while castling king side (start, transit, destination).
pub const KING_SIDE_KING_PATH: [u8; 3] = [4, 5, 6];
/// Files the king stands on while castling queen side (start, transit, destination).
pub const QUEEN_SIDE_KING_PATH: [u8; 3] = [4, 3, 2];

pub const KING_SIDE_ROOK_DESTINATION_FILE: u8 = 5;
pub const QUEEN_SIDE_ROOK_DESTINATION_FILE: u8 = 3;
