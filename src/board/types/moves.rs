//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// Special-move tag.
///
/// Needed because source and destination alone cannot tell a promotion piece,
/// en passant from an ordinary capture, or castling from a two-square king
/// step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Special {
    None,
    /// King move other than castling
    KingMove,
    PromoteQueen,
    PromoteRook,
    PromoteBishop,
    PromoteKnight,
    WhiteEnPassant,
    BlackEnPassant,
    WhiteDoubleAdvance,
    BlackDoubleAdvance,
    WhiteCastleKingside,
    WhiteCastleQueenside,
    BlackCastleKingside,
    BlackCastleQueenside,
}

impl Special {
    /// Promotion tag for a piece; `None` for pawn or king
    #[must_use]
    pub const fn promotion_to(piece: Piece) -> Option<Special> {
        match piece {
            Piece::Queen => Some(Special::PromoteQueen),
            Piece::Rook => Some(Special::PromoteRook),
            Piece::Bishop => Some(Special::PromoteBishop),
            Piece::Knight => Some(Special::PromoteKnight),
            Piece::Pawn | Piece::King => None,
        }
    }

    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self {
            Special::PromoteQueen => Some(Piece::Queen),
            Special::PromoteRook => Some(Piece::Rook),
            Special::PromoteBishop => Some(Piece::Bishop),
            Special::PromoteKnight => Some(Piece::Knight),
            _ => None,
        }
    }

    #[must_use]
    pub const fn en_passant(color: Color) -> Special {
        match color {
            Color::White => Special::WhiteEnPassant,
            Color::Black => Special::BlackEnPassant,
        }
    }

    #[must_use]
    pub const fn double_advance(color: Color) -> Special {
        match color {
            Color::White => Special::WhiteDoubleAdvance,
            Color::Black => Special::BlackDoubleAdvance,
        }
    }

    #[must_use]
    pub const fn castling(color: Color, kingside: bool) -> Special {
        match (color, kingside) {
            (Color::White, true) => Special::WhiteCastleKingside,
            (Color::White, false) => Special::WhiteCastleQueenside,
            (Color::Black, true) => Special::BlackCastleKingside,
            (Color::Black, false) => Special::BlackCastleQueenside,
        }
    }

    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(
            self,
            Special::WhiteCastleKingside
                | Special::WhiteCastleQueenside
                | Special::BlackCastleKingside
                | Special::BlackCastleQueenside
        )
    }

    #[must_use]
    pub const fn is_kingside_castling(self) -> bool {
        matches!(self, Special::WhiteCastleKingside | Special::BlackCastleKingside)
    }

    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self, Special::WhiteEnPassant | Special::BlackEnPassant)
    }

    #[must_use]
    pub const fn is_double_advance(self) -> bool {
        matches!(self, Special::WhiteDoubleAdvance | Special::BlackDoubleAdvance)
    }
}

/// A move: source, destination, special tag and the piece it captures.
///
/// The captured piece is recorded at generation time so that `undo` can put
/// it back; its color is always the opponent of the mover.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    special: Special,
    captured: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, special: Special, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            special,
            captured,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn special(self) -> Special {
        self.special
    }

    /// Piece captured by this move (a pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.special.is_en_passant()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.special.is_castling()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.special.promotion().is_some()
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.special.promotion()
    }

    /// Coordinate notation, e.g. "e2e4" or "e7e8q"
    #[must_use]
    pub fn to_uci(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl From<MoveList> for Vec<Move> {
    fn from(list: MoveList) -> Self {
        list.moves
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_coordinate_notation() {
        let e2: Square = "e2".parse().unwrap();
        let e4: Square = "e4".parse().unwrap();
        let mv = Move::new(e2, e4, Special::WhiteDoubleAdvance, None);
        assert_eq!(mv.to_string(), "e2e4");

        let e7: Square = "e7".parse().unwrap();
        let promo = Move::new(e7, Square::E8, Special::PromoteKnight, None);
        assert_eq!(promo.to_uci(), "e7e8n");
        assert_eq!(promo.promotion(), Some(Piece::Knight));
    }

    #[test]
    fn test_special_predicates() {
        assert!(Special::BlackCastleQueenside.is_castling());
        assert!(!Special::BlackCastleQueenside.is_kingside_castling());
        assert!(Special::en_passant(Color::Black).is_en_passant());
        assert_eq!(Special::double_advance(Color::White), Special::WhiteDoubleAdvance);
        assert_eq!(Special::promotion_to(Piece::King), None);
        assert_eq!(Special::promotion_to(Piece::Rook), Some(Special::PromoteRook));
        assert_eq!(Special::KingMove.promotion(), None);
    }
}
