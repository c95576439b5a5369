//! Primitive chess vocabulary shared by every subsystem.
//!
//! Colors, piece kinds, castling rights and board squares. Piece kinds carry a
//! fixed index order (King, Queen, Rook, Bishop, Knight, Pawn) that value tables
//! and notation-letter tables are indexed by.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the pawns of this color start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank the king and rooks of this color start on.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank on which pawns of this color promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().home_rank()
    }
}

/// Piece kind, color is tracked separately.
///
/// The index order is part of the public contract: King = 0, Queen = 1,
/// Rook = 2, Bishop = 3, Knight = 4, Pawn = 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Letters indexed by [`PieceKind::index`].
    pub const LETTERS: [char; 6] = ['K', 'Q', 'R', 'B', 'N', 'P'];

    /// Promotion targets in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<PieceKind> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Upper-case letter for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        Self::LETTERS[self.index()]
    }

    /// Parses an upper-case piece letter.
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        Self::LETTERS
            .iter()
            .position(|&l| l == letter)
            .and_then(Self::from_index)
    }

    #[inline]
    pub const fn is_valid_promotion(self) -> bool {
        !matches!(self, PieceKind::King | PieceKind::Pawn)
    }
}

/// Castling availability for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleRights {
    NoRights,
    KingSide,
    QueenSide,
    Both,
}

impl CastleRights {
    #[inline]
    pub const fn has_king_side(self) -> bool {
        matches!(self, CastleRights::KingSide | CastleRights::Both)
    }

    #[inline]
    pub const fn has_queen_side(self) -> bool {
        matches!(self, CastleRights::QueenSide | CastleRights::Both)
    }

    #[inline]
    pub const fn without_king_side(self) -> Self {
        match self {
            CastleRights::Both => CastleRights::QueenSide,
            CastleRights::KingSide => CastleRights::NoRights,
            other => other,
        }
    }

    #[inline]
    pub const fn without_queen_side(self) -> Self {
        match self {
            CastleRights::Both => CastleRights::KingSide,
            CastleRights::QueenSide => CastleRights::NoRights,
            other => other,
        }
    }
}

/// Board square (`rank * 8 + file`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Builds a square from zero-based file and rank.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`. Use [`Square::try_new`]
    /// for unvalidated input.
    #[inline]
    pub fn new(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square out of range: file {file}, rank {rank}");
        Square(rank * 8 + file)
    }

    #[inline]
    pub fn try_new(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// Square shifted by a file/rank delta, `None` when it leaves the board.
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::try_new(self.file() as i8 + file_delta, self.rank() as i8 + rank_delta)
    }

    /// True for dark squares (a1 is dark).
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }

    /// All 64 squares in a1, b1, ..., h8 order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + self.file());
        let rank_char = char::from(b'1' + self.rank());
        write!(f, "{file_char}{rank_char}")
    }
}

/// Iterates the squares of a bitboard in ascending order.
#[inline]
pub fn squares_of_mask(mask: u64) -> impl Iterator<Item = Square> {
    let mut bits = mask;
    std::iter::from_fn(move || {
        if bits == 0 {
            return None;
        }
        let sq = bits.trailing_zeros() as u8;
        bits &= bits - 1;
        Some(Square(sq))
    })
}
