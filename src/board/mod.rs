//! Chess position and rules.
//!
//! A `Position` is a 64-square board plus side to move, a detail record
//! (king squares, castling flags, en-passant target) and the move history.
//! Moves are applied and undone in strict LIFO order; legality, draw and
//! notation checks are built on that apply/undo pair and leave the position
//! as they found it.
//!
//! # Example
//! ```
//! use chess_rules::board::Position;
//!
//! let mut pos = Position::new();
//! let moves = pos.generate_legal();
//! assert_eq!(moves.len(), 20);
//! pos.play_san("e4").unwrap();
//! pos.play_uci("e7e5").unwrap();
//! assert_eq!(pos.fullmove_number(), 2);
//! ```

mod builder;
mod draw;
mod error;
mod fen;
mod geometry;
mod make_unmake;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;
mod uci;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use draw::DrawKind;
pub use error::{
    FenError, IllegalPosition, IllegalReason, MoveParseError, MoveRejection, RulesError, SanError,
    SquareError,
};
pub use fen::STARTING_FEN;
pub use state::{Cell, Detail, Position};
pub use status::{AnnotatedMove, Terminal};
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Special, Square};
pub use uci::UciMove;
