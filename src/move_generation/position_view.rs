//! Read-only capabilities pseudo-legal generation needs from a position.
//!
//! Generation is written against this trait rather than `GameState` so the
//! per-piece rules can be exercised against hand-built positions.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;

pub trait PositionView {
    fn side_to_move(&self) -> Color;

    fn castle_rights(&self, color: Color) -> CastleRights;

    fn en_passant_square(&self) -> Option<Square>;

    fn piece_at_side(&self, square: Square, color: Color) -> Option<PieceKind>;

    fn is_square_attacked(&self, square: Square, attacker: Color) -> bool;

    fn any_piece_at_side(&self, square: Square, color: Color) -> bool {
        self.piece_at_side(square, color).is_some()
    }

    fn any_piece_at(&self, square: Square) -> bool {
        Color::ALL
            .into_iter()
            .any(|color| self.any_piece_at_side(square, color))
    }
}

impl PositionView for GameState {
    #[inline]
    fn side_to_move(&self) -> Color {
        GameState::side_to_move(self)
    }

    #[inline]
    fn castle_rights(&self, color: Color) -> CastleRights {
        GameState::castle_rights(self, color)
    }

    #[inline]
    fn en_passant_square(&self) -> Option<Square> {
        GameState::en_passant_square(self)
    }

    #[inline]
    fn piece_at_side(&self, square: Square, color: Color) -> Option<PieceKind> {
        GameState::piece_at_side(self, square, color)
    }

    #[inline]
    fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        is_square_attacked(self, square, attacker)
    }

    #[inline]
    fn any_piece_at_side(&self, square: Square, color: Color) -> bool {
        GameState::any_piece_at_side(self, square, color)
    }

    #[inline]
    fn any_piece_at(&self, square: Square) -> bool {
        GameState::any_piece_at(self, square)
    }
}

/// Sparse position with an explicit attacked-square set, for unit tests.
#[cfg(test)]
pub(crate) mod stub {
    use std::collections::{HashMap, HashSet};

    use super::PositionView;
    use crate::game_state::chess_types::*;

    pub(crate) struct StubPosition {
        pub side: Color,
        pub rights: [CastleRights; 2],
        pub en_passant: Option<Square>,
        pub pieces: HashMap<Square, (Color, PieceKind)>,
        pub attacked: HashSet<(Square, Color)>,
    }

    impl StubPosition {
        pub(crate) fn new(side: Color) -> Self {
            Self {
                side,
                rights: [CastleRights::NoRights; 2],
                en_passant: None,
                pieces: HashMap::new(),
                attacked: HashSet::new(),
            }
        }

        pub(crate) fn with(mut self, square: &str, color: Color, kind: PieceKind) -> Self {
            self.pieces.insert(square_of(square), (color, kind));
            self
        }

        pub(crate) fn attacked_by(mut self, square: &str, attacker: Color) -> Self {
            self.attacked.insert((square_of(square), attacker));
            self
        }
    }

    pub(crate) fn square_of(text: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(text).expect("valid square")
    }

    impl PositionView for StubPosition {
        fn side_to_move(&self) -> Color {
            self.side
        }

        fn castle_rights(&self, color: Color) -> CastleRights {
            self.rights[color.index()]
        }

        fn en_passant_square(&self) -> Option<Square> {
            self.en_passant
        }

        fn piece_at_side(&self, square: Square, color: Color) -> Option<PieceKind> {
            match self.pieces.get(&square) {
                Some(&(owner, kind)) if owner == color => Some(kind),
                _ => None,
            }
        }

        fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
            self.attacked.contains(&(square, attacker))
        }
    }
}
