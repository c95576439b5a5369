//! Move record and its text form.
//!
//! A move is `(from, to, promotion)`. Equality treats a missing promotion as a
//! Queen promotion, so `e7-e8` and `e7-e8Q` compare equal; history and redo
//! matching rely on this.
//!
//! Text form: `{file}{rank}-{file}{rank}{promotion letter?}`, for example
//! `e2-e4` or `b7-b8N`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_from_bytes;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Promotion piece with the Queen default applied.
    #[inline]
    pub fn promotion_or_queen(&self) -> PieceKind {
        self.promotion.unwrap_or(PieceKind::Queen)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promotion_or_queen() == other.promotion_or_queen()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.promotion_or_queen().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessError::InvalidMoveText(text.to_owned());
        let bytes = text.as_bytes();
        if !(bytes.len() == 5 || bytes.len() == 6) || bytes[2] != b'-' {
            return Err(invalid());
        }

        let from = square_from_bytes(bytes[0], bytes[1]).ok_or_else(invalid)?;
        let to = square_from_bytes(bytes[3], bytes[4]).ok_or_else(invalid)?;
        let promotion = match bytes.get(5) {
            Some(&letter) => Some(PieceKind::from_letter(char::from(letter)).ok_or_else(invalid)?),
            None => None,
        };

        Ok(Move { from, to, promotion })
    }
}
