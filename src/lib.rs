//! Chess rules core: positions, legal move generation, apply/undo, check and
//! terminal detection, draw adjudication, and UCI / SAN notation.

pub mod board;
pub mod game;

pub use board::{Color, Move, Piece, Position, Square};
pub use game::{Game, GameStatus};
