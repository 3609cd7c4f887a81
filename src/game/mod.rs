//! Game facade for the collaborators around the rules core.
//!
//! A board reader asks which moves are legal and whether a drag from one
//! square to another is one of them. An engine link exchanges moves as UCI
//! text and reads the position back as FEN. Both go through `Game`, or
//! through `SharedGame` when they live on different threads.

mod session;
mod shared;

pub use session::{Game, GameStatus};
pub use shared::SharedGame;
