//! Bitboard position record.
//!
//! `GameState` stores one bitboard per (color, piece kind), occupancy caches,
//! the side to move, castling rights per color, the en-passant target and the
//! halfmove clock. It has no history: every move application produces a new
//! value and leaves the original untouched.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove};
use crate::moves::chess_move::Move;

const RANK_1: u64 = 0x0000_0000_0000_00FF;
const RANK_2: u64 = RANK_1 << 8;
const RANK_7: u64 = RANK_1 << 48;
const RANK_8: u64 = RANK_1 << 56;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    // [color][piece_kind]
    pub(crate) pieces: [[u64; 6]; 2],

    // Occupancy caches.
    pub(crate) occupancy_by_color: [u64; 2],
    pub(crate) occupancy_all: u64,

    pub(crate) side_to_move: Color,
    pub(crate) castle_rights: [CastleRights; 2],
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u8,
}

impl GameState {
    /// Board without pieces, White to move, no rights.
    pub(crate) fn empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side_to_move: Color::White,
            castle_rights: [CastleRights::NoRights; 2],
            en_passant_square: None,
            halfmove_clock: 0,
        }
    }

    /// Standard initial position.
    pub fn new_game() -> Self {
        let mut state = Self::empty();
        let back_rank = [
            (PieceKind::Rook, 0x81u64),
            (PieceKind::Knight, 0x42),
            (PieceKind::Bishop, 0x24),
            (PieceKind::Queen, 0x08),
            (PieceKind::King, 0x10),
        ];

        for (kind, mask) in back_rank {
            state.pieces[Color::White.index()][kind.index()] = mask & RANK_1;
            state.pieces[Color::Black.index()][kind.index()] = (mask << 56) & RANK_8;
        }
        state.pieces[Color::White.index()][PieceKind::Pawn.index()] = RANK_2;
        state.pieces[Color::Black.index()][PieceKind::Pawn.index()] = RANK_7;
        state.castle_rights = [CastleRights::Both; 2];
        state.recalc_occupancy();
        state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castle_rights(&self, color: Color) -> CastleRights {
        self.castle_rights[color.index()]
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_all
    }

    pub fn piece_at_side(&self, square: Square, color: Color) -> Option<PieceKind> {
        let mask = square.mask();
        if self.occupancy_by_color[color.index()] & mask == 0 {
            return None;
        }
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & mask != 0)
    }

    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        Color::ALL
            .into_iter()
            .find_map(|color| self.piece_at_side(square, color).map(|kind| (color, kind)))
    }

    #[inline]
    pub fn any_piece_at_side(&self, square: Square, color: Color) -> bool {
        self.occupancy_by_color[color.index()] & square.mask() != 0
    }

    #[inline]
    pub fn any_piece_at(&self, square: Square) -> bool {
        self.occupancy_all & square.mask() != 0
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        squares_of_mask(self.pieces(color, PieceKind::King)).next()
    }

    /// Squares holding `kind` pieces of `color`, ascending.
    pub fn squares_of(&self, color: Color, kind: PieceKind) -> Vec<Square> {
        squares_of_mask(self.pieces(color, kind)).collect()
    }

    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.occupancy_by_color[color.index()].count_ones()
    }

    /// Executes a pseudo-legal move on a copy; fails if the mover's king is
    /// left attacked.
    #[inline]
    pub fn apply_pseudo_move(&self, mv: &Move) -> ChessResult<AppliedMove> {
        apply_move(self, mv)
    }

    /// Places a piece, clearing whatever stood on the square.
    pub(crate) fn put_piece(&mut self, square: Square, color: Color, kind: PieceKind) {
        self.clear_square(square);
        self.pieces[color.index()][kind.index()] |= square.mask();
    }

    pub(crate) fn clear_square(&mut self, square: Square) {
        let keep = !square.mask();
        for side in self.pieces.iter_mut() {
            for bitboard in side.iter_mut() {
                *bitboard &= keep;
            }
        }
    }

    pub(crate) fn recalc_occupancy(&mut self) {
        for color in Color::ALL {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn new_game_places_thirty_two_pieces() {
        let state = GameState::new_game();
        assert_eq!(state.occupancy_all().count_ones(), 32);
        assert_eq!(state.piece_count(Color::White), 16);
        assert_eq!(state.piece_count(Color::Black), 16);
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.castle_rights(Color::Black), CastleRights::Both);
        assert_eq!(state.en_passant_square(), None);
    }

    #[test]
    fn new_game_piece_placement() {
        let state = GameState::new_game();
        assert_eq!(
            state.piece_at(Square::new(4, 0)),
            Some((Color::White, PieceKind::King))
        );
        assert_eq!(
            state.piece_at(Square::new(3, 7)),
            Some((Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            state.piece_at(Square::new(6, 7)),
            Some((Color::Black, PieceKind::Knight))
        );
        assert_eq!(state.piece_at(Square::new(4, 4)), None);
        assert_eq!(state.piece_at_side(Square::new(0, 1), Color::Black), None);
        assert_eq!(state.king_square(Color::Black), Some(Square::new(4, 7)));
        assert_eq!(state.squares_of(Color::White, PieceKind::Rook).len(), 2);
    }

    #[test]
    fn apply_pseudo_move_returns_fresh_state() {
        let state = GameState::new_game();
        let e2_e4: Move = "e2-e4".parse().expect("valid move text");

        let applied = state.apply_pseudo_move(&e2_e4).expect("legal move");
        assert_eq!(applied.captured, None);
        assert_eq!(applied.state.side_to_move(), Color::Black);
        assert_eq!(applied.state.en_passant_square(), Some(Square::new(4, 2)));
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn apply_pseudo_move_rejects_exposed_king() {
        let state = parse_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").expect("valid fen");
        let bishop_move: Move = "e2-d3".parse().expect("valid move text");

        assert_eq!(
            state.apply_pseudo_move(&bishop_move),
            Err(ChessError::KingLeftInCheck(bishop_move))
        );
    }

    #[test]
    fn put_piece_replaces_occupant() {
        let mut state = GameState::new_game();
        let e2 = Square::new(4, 1);
        state.put_piece(e2, Color::Black, PieceKind::Knight);
        state.recalc_occupancy();

        assert_eq!(state.piece_at(e2), Some((Color::Black, PieceKind::Knight)));
        assert_eq!(state.piece_count(Color::White), 15);
        assert_eq!(state.piece_count(Color::Black), 17);
    }
}
