use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Color, DrawKind, Move, MoveRejection, Piece, Position, RulesError, Square, Terminal,
};

/// Outcome of the game as seen from the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawKind),
    /// The side not to move has its king attacked; the layout was never
    /// validated.
    Illegal,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// A position plus the counters needed to take moves back.
#[derive(Clone, Debug, Default)]
pub struct Game {
    position: Position,
    /// Half-move clock and full-move number before each move played here
    counters: Vec<(u32, u32)>,
}

impl Game {
    /// Start a game from the initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            counters: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.position.generate_legal().into()
    }

    pub fn legal_moves_uci(&mut self) -> Vec<String> {
        self.position
            .generate_legal()
            .iter()
            .map(Move::to_uci)
            .collect()
    }

    /// Legal moves in SAN, in generation order, one entry per legal move so
    /// the list lines up with `legal_moves_uci`.
    pub fn legal_moves_san(&mut self) -> Vec<String> {
        let moves = self.position.generate_legal();
        moves
            .iter()
            .map(|mv| {
                self.position.move_to_san(mv).unwrap_or_else(|err| {
                    warn!("no SAN for generated move {mv}: {err}");
                    mv.to_uci()
                })
            })
            .collect()
    }

    /// Legal moves starting on `from`.
    pub fn moves_from(&mut self, from: Square) -> Vec<Move> {
        self.position
            .generate_legal()
            .into_iter()
            .filter(|mv| mv.from() == from)
            .collect()
    }

    /// Resolve UCI text to a legal move without playing it.
    pub fn validate_uci(&mut self, notation: &str) -> Result<Move, RulesError> {
        Ok(self.position.resolve_uci(notation)?)
    }

    /// Resolve a source/destination pair to a legal move.
    ///
    /// When the pair only names promotions, the queen promotion is chosen.
    pub fn validate(&mut self, from: Square, to: Square) -> Result<Move, RulesError> {
        let candidates: Vec<Move> = self
            .position
            .generate_legal()
            .into_iter()
            .filter(|mv| mv.from() == from && mv.to() == to)
            .collect();
        let chosen = match candidates.as_slice() {
            [only] => Some(*only),
            _ => candidates
                .iter()
                .copied()
                .find(|mv| mv.promotion() == Some(Piece::Queen)),
        };
        chosen.ok_or_else(|| {
            RulesError::invalid_move(format!("{from}{to}"), MoveRejection::NotLegal)
        })
    }

    /// Play a legal `Move` value.
    pub fn play(&mut self, mv: Move) -> Result<(), RulesError> {
        if !self.position.is_legal_move(&mv) {
            warn!("rejected move {mv}: not legal in {}", self.position.to_fen());
            return Err(RulesError::invalid_move(mv.to_uci(), MoveRejection::NotLegal));
        }
        self.commit(&mv);
        Ok(())
    }

    /// Play a move given in UCI text. The game is untouched on error.
    pub fn play_uci(&mut self, notation: &str) -> Result<Move, RulesError> {
        let mv = self.position.resolve_uci(notation).map_err(|err| {
            warn!("rejected UCI move {notation}: {err}");
            RulesError::from(err)
        })?;
        self.commit(&mv);
        Ok(mv)
    }

    /// Play a move given in SAN. The game is untouched on error.
    pub fn play_san(&mut self, san: &str) -> Result<Move, RulesError> {
        let mv = self.position.parse_san(san).map_err(|err| {
            warn!("rejected SAN move {san}: {err}");
            RulesError::from(err)
        })?;
        self.commit(&mv);
        Ok(mv)
    }

    /// Undo the last move played through this game, counters included.
    pub fn take_back(&mut self) -> Option<Move> {
        let (halfmove, fullmove) = self.counters.pop()?;
        let mv = self.position.last_move()?;
        self.position.undo(&mv);
        self.position.halfmove_clock = halfmove;
        self.position.fullmove_number = fullmove;
        debug!("took back {mv}");
        Some(mv)
    }

    /// Draw the side to move may claim, including a claim against a lone
    /// king that `status` does not report on its own.
    pub fn claim_draw(&mut self) -> Option<DrawKind> {
        let white_asks = self.position.white_to_move();
        self.position.draw_status(white_asks)
    }

    /// `Illegal` for an unvalidated layout with the side not to move in
    /// check. Otherwise checkmate and stalemate first, then automatic
    /// insufficient material, the fifty-move rule and threefold repetition.
    pub fn status(&mut self) -> GameStatus {
        let (legal, terminal) = self.position.evaluate();
        if !legal {
            warn!("status requested for illegal position {}", self.position.to_fen());
            return GameStatus::Illegal;
        }
        match terminal {
            Terminal::WhiteCheckmate => GameStatus::Checkmate {
                winner: Color::Black,
            },
            Terminal::BlackCheckmate => GameStatus::Checkmate {
                winner: Color::White,
            },
            Terminal::WhiteStalemate | Terminal::BlackStalemate => GameStatus::Stalemate,
            Terminal::None => {
                let pos = &mut self.position;
                let auto = pos.insufficient_material(pos.white_to_move())
                    == Some(DrawKind::InsufficientAuto);
                let draw = if auto {
                    Some(DrawKind::InsufficientAuto)
                } else if pos.is_fifty_move_draw() {
                    Some(DrawKind::FiftyMove)
                } else if pos.is_threefold_repetition() {
                    Some(DrawKind::Repetition)
                } else {
                    None
                };
                draw.map_or(GameStatus::Ongoing, GameStatus::Draw)
            }
        }
    }

    fn commit(&mut self, mv: &Move) {
        self.counters
            .push((self.position.halfmove_clock(), self.position.fullmove_number()));
        self.position.play_move(mv);
    }
}
