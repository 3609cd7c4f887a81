//! Legality, check and terminal-position evaluation.

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{IllegalPosition, IllegalReason};
use super::types::{Color, Move, Piece, Square};
use super::Position;

/// Terminal state of a position. The color names the side that is mated or
/// stalemated, which is always the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Terminal {
    None,
    WhiteCheckmate,
    BlackCheckmate,
    WhiteStalemate,
    BlackStalemate,
}

impl Terminal {
    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        matches!(self, Terminal::WhiteCheckmate | Terminal::BlackCheckmate)
    }

    #[must_use]
    pub const fn is_stalemate(self) -> bool {
        matches!(self, Terminal::WhiteStalemate | Terminal::BlackStalemate)
    }
}

/// A legal move with what it does to the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotatedMove {
    pub mv: Move,
    pub check: bool,
    pub mate: bool,
    pub stalemate: bool,
}

impl Position {
    /// Judge the position as reached by the last move.
    ///
    /// Returns `(false, Terminal::None)` if the side not to move has its king
    /// attacked. Otherwise the position is legal, and terminal when the side
    /// to move has no legal move.
    pub fn evaluate(&mut self) -> (bool, Terminal) {
        let mover = self.side_to_move();
        if self.is_attacked(self.king_square(mover.opponent()), mover) {
            trace!("{} king is attacked with {mover} to move", mover.opponent());
            return (false, Terminal::None);
        }
        if self.has_legal_move() {
            return (true, Terminal::None);
        }
        let terminal = match (self.is_check(), mover) {
            (true, Color::White) => Terminal::WhiteCheckmate,
            (true, Color::Black) => Terminal::BlackCheckmate,
            (false, Color::White) => Terminal::WhiteStalemate,
            (false, Color::Black) => Terminal::BlackStalemate,
        };
        debug!("terminal position: {terminal:?}");
        (true, terminal)
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn is_check(&self) -> bool {
        let mover = self.side_to_move();
        self.is_attacked(self.king_square(mover), mover.opponent())
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_check() && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_check() && !self.has_legal_move()
    }

    /// Is `mv` one of the legal moves here?
    pub fn is_legal_move(&mut self, mv: &Move) -> bool {
        self.generate_pseudo_legal().contains(mv) && self.leaves_king_safe(mv)
    }

    /// Legal moves, each marked with whether it gives check, mate or
    /// stalemate.
    pub fn legal_moves_annotated(&mut self) -> Vec<AnnotatedMove> {
        let moves = self.generate_legal();
        let mut out = Vec::with_capacity(moves.len());
        for mv in moves {
            self.apply(&mv);
            let check = self.is_check();
            let any = self.has_legal_move();
            self.undo(&mv);
            out.push(AnnotatedMove {
                mv,
                check,
                mate: check && !any,
                stalemate: !check && !any,
            });
        }
        out
    }

    /// Structural validation of a set-up position.
    pub fn validate(&self) -> Result<(), IllegalPosition> {
        let mut reasons = Vec::new();
        let mut kings = [0usize; 2];
        let mut pawns = [0usize; 2];
        let mut pieces = [0usize; 2];
        let mut pawn_on_back_rank = false;

        for sq in Square::all() {
            let Some((color, piece)) = self.piece_at(sq) else {
                continue;
            };
            let c = color.index();
            if piece == Piece::Pawn {
                pawns[c] += 1;
                if sq.rank() == 0 || sq.rank() == 7 {
                    pawn_on_back_rank = true;
                }
            } else {
                pieces[c] += 1;
                if piece == Piece::King {
                    kings[c] += 1;
                }
            }
        }

        if pawn_on_back_rank {
            reasons.push(IllegalReason::PawnOnBackRank);
        }
        if kings != [1, 1] {
            reasons.push(IllegalReason::NotOneKingEach);
        }
        let mover = self.side_to_move();
        let opponent = mover.opponent();
        let opponent_king = self.king_square(opponent);
        if kings[opponent.index()] > 0
            && self.is_piece(opponent_king, opponent, Piece::King)
            && self.is_attacked(opponent_king, mover)
        {
            reasons.push(IllegalReason::OpponentKingAttacked);
        }
        let white = Color::White.index();
        let black = Color::Black.index();
        if pieces[white] > 8 && pieces[white] + pawns[white] > 16 {
            reasons.push(IllegalReason::WhiteTooManyPieces);
        }
        if pieces[black] > 8 && pieces[black] + pawns[black] > 16 {
            reasons.push(IllegalReason::BlackTooManyPieces);
        }
        if pawns[white] > 8 {
            reasons.push(IllegalReason::WhiteTooManyPawns);
        }
        if pawns[black] > 8 {
            reasons.push(IllegalReason::BlackTooManyPawns);
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            debug!("position rejected: {reasons:?}");
            Err(IllegalPosition::new(reasons))
        }
    }

    pub(crate) fn has_legal_move(&mut self) -> bool {
        let pseudo = self.generate_pseudo_legal();
        pseudo.iter().any(|mv| self.leaves_king_safe(mv))
    }
}
