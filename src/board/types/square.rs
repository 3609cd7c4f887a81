//! Square type and coordinate arithmetic.
//!
//! Squares are numbered row-major from the top-left corner as seen by White:
//! a8 = 0, b8 = 1, ..., h8 = 7, a7 = 8, ..., h1 = 63. Every neighbour and
//! coordinate function below is a pure function of that numbering.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);

    /// Create a square from file (0 = a) and rank (0 = rank 1).
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(((7 - rank) * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from its index (0 = a8, 63 = h1).
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Index into a 64-entry board layout.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File 0-7, where 0 is the a-file
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Rank 0-7, where 0 is rank 1
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        7 - (self.0 / 8) as usize
    }

    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.file() as u8) as char
    }

    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank() as u8) as char
    }

    /// Square one rank towards Black's side, if any.
    #[inline]
    #[must_use]
    pub const fn north(self) -> Option<Self> {
        if self.0 >= 8 {
            Some(Square(self.0 - 8))
        } else {
            None
        }
    }

    /// Square one rank towards White's side, if any.
    #[inline]
    #[must_use]
    pub const fn south(self) -> Option<Self> {
        if self.0 < 56 {
            Some(Square(self.0 + 8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn east(self) -> Option<Self> {
        if self.0 % 8 < 7 {
            Some(Square(self.0 + 1))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn west(self) -> Option<Self> {
        if self.0 % 8 > 0 {
            Some(Square(self.0 - 1))
        } else {
            None
        }
    }

    /// Step by a file and rank delta (rank delta positive = towards rank 8).
    #[must_use]
    pub fn offset(self, file_delta: isize, rank_delta: isize) -> Option<Self> {
        let file = self.file() as isize + file_delta;
        let rank = self.rank() as isize + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Square::new(file as usize, rank as usize)
        } else {
            None
        }
    }

    /// All 64 squares in index order (a8 first, h1 last).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::from_index(idx).ok_or(SquareError::IndexOutOfBounds { index: idx })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };
        Square::new(file, rank).ok_or_else(invalid)
    }
}
