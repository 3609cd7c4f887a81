use std::sync::Arc;

use parking_lot::Mutex;

use super::{Game, GameStatus};
use crate::board::{Move, RulesError, Square};

/// A `Game` shared between collaborators on different threads.
///
/// Every call takes the lock for its whole duration, so a move is resolved
/// and played without another caller observing the position in between.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.inner.lock();
        f(&mut game)
    }

    pub fn play_uci(&self, notation: &str) -> Result<Move, RulesError> {
        self.inner.lock().play_uci(notation)
    }

    pub fn play_san(&self, san: &str) -> Result<Move, RulesError> {
        self.inner.lock().play_san(san)
    }

    pub fn validate(&self, from: Square, to: Square) -> Result<Move, RulesError> {
        self.inner.lock().validate(from, to)
    }

    #[must_use]
    pub fn legal_moves_uci(&self) -> Vec<String> {
        self.inner.lock().legal_moves_uci()
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.inner.lock().to_fen()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.inner.lock().status()
    }
}
