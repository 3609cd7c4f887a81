//! Fluent builder for setting up positions.
//!
//! Supplies the conventional setup fields one by one instead of as FEN text.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let pos = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::error::IllegalPosition;
use super::types::{CastlingRights, Color, Piece, Square};
use super::Position;

/// A fluent builder for `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Start from an empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        let pieces = Square::all()
            .filter_map(|sq| start.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
            .collect();
        PositionBuilder {
            pieces,
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, kingside: bool) -> Self {
        self.castling.set(color, kingside);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant = target;
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build and validate the position.
    pub fn build(self) -> Result<Position, IllegalPosition> {
        let mut pos = Position::empty();
        for (square, color, piece) in self.pieces {
            pos.set(square, Some((color, piece)));
        }
        pos.white_to_move = self.side_to_move == Color::White;
        pos.detail.castling = self.castling;
        pos.detail.en_passant = self.en_passant;
        pos.halfmove_clock = self.halfmove_clock;
        pos.fullmove_number = self.fullmove_number.max(1);
        pos.locate_kings();
        pos.validate()?;
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::IllegalReason;

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build().unwrap();
        assert_eq!(built, Position::new());
    }

    #[test]
    fn test_castling_rights() {
        let pos = PositionBuilder::starting_position()
            .castling(CastlingRights::none())
            .castle(Color::White, true)
            .build()
            .unwrap();
        let rights = pos.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
    }

    #[test]
    fn test_clear_square() {
        let pos = PositionBuilder::starting_position()
            .clear(Square::A1)
            .build()
            .unwrap();
        assert!(pos.piece_at(Square::A1).is_none());
        assert!(pos.piece_at(Square::B1).is_some());
    }

    #[test]
    fn test_rejects_missing_king_and_back_rank_pawn() {
        let err = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::A8, Color::White, Piece::Pawn)
            .build()
            .unwrap_err();
        assert!(err.contains(IllegalReason::NotOneKingEach));
        assert!(err.contains(IllegalReason::PawnOnBackRank));
    }

    #[test]
    fn test_rejects_too_many_pawns() {
        let mut builder = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King);
        for file in 0..8 {
            let (Some(second), Some(third)) = (Square::new(file, 1), Square::new(file, 2)) else {
                unreachable!()
            };
            builder = builder
                .piece(second, Color::White, Piece::Pawn)
                .piece(third, Color::White, Piece::Pawn);
        }
        let err = builder.build().unwrap_err();
        assert_eq!(err.reasons(), &[IllegalReason::WhiteTooManyPawns]);
    }
}
