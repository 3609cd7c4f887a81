//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut pos = Position::new();
//! assert_eq!(pos.evaluate(), (true, Terminal::None));
//! ```

pub use super::{
    Color, DrawKind, Move, MoveList, Piece, Position, PositionBuilder, RulesError, Special,
    Square, Terminal,
};
