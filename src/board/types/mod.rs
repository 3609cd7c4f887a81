//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - board square numbered a8 = 0 through h1 = 63
//! - `Move`, `Special` and `MoveList` - move representation
//! - `CastlingRights` - the four castling flags

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, Special};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
