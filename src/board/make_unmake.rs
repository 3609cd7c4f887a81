use log::debug;

use super::types::{Color, Move, Piece, Special, Square};
use super::Position;

/// King and rook squares for a castling move: (king from, king to, rook
/// from, rook to).
pub(crate) const fn castling_squares(special: Special) -> Option<(Square, Square, Square, Square)> {
    match special {
        Special::WhiteCastleKingside => Some((Square::E1, Square::G1, Square::H1, Square::F1)),
        Special::WhiteCastleQueenside => Some((Square::E1, Square::C1, Square::A1, Square::D1)),
        Special::BlackCastleKingside => Some((Square::E8, Square::G8, Square::H8, Square::F8)),
        Special::BlackCastleQueenside => Some((Square::E8, Square::C8, Square::A8, Square::D8)),
        _ => None,
    }
}

/// Square of the pawn removed by an en-passant capture: beside the source,
/// behind the destination.
fn en_passant_victim(mv: &Move) -> Option<Square> {
    Square::new(mv.to().file(), mv.from().rank())
}

impl Position {
    /// Apply a move without touching the move counters.
    ///
    /// The move is assumed to come from this position's generator; legality
    /// is not checked. Must be paired with `undo` in LIFO order.
    pub fn apply(&mut self, mv: &Move) {
        let mover = self.side_to_move();
        self.detail_stack.push(self.detail);
        self.history.push(*mv);

        self.detail.castling.revoke_for_destination(mv.to());
        self.detail.en_passant = None;

        let (from, to) = (mv.from(), mv.to());
        match mv.special() {
            Special::None => self.relocate(from, to),
            Special::KingMove => {
                self.relocate(from, to);
                self.detail.set_king(mover, to);
            }
            Special::PromoteQueen
            | Special::PromoteRook
            | Special::PromoteBishop
            | Special::PromoteKnight => {
                self.set(from, None);
                self.set(to, mv.promotion().map(|piece| (mover, piece)));
            }
            Special::WhiteEnPassant | Special::BlackEnPassant => {
                self.relocate(from, to);
                if let Some(victim) = en_passant_victim(mv) {
                    self.set(victim, None);
                }
            }
            Special::WhiteDoubleAdvance | Special::BlackDoubleAdvance => {
                self.relocate(from, to);
                self.detail.en_passant = Square::new(from.file(), (from.rank() + to.rank()) / 2);
            }
            Special::WhiteCastleKingside
            | Special::WhiteCastleQueenside
            | Special::BlackCastleKingside
            | Special::BlackCastleQueenside => {
                if let Some((king_from, king_to, rook_from, rook_to)) =
                    castling_squares(mv.special())
                {
                    self.relocate(king_from, king_to);
                    self.relocate(rook_from, rook_to);
                    self.detail.set_king(mover, king_to);
                }
            }
        }

        self.white_to_move = !self.white_to_move;
    }

    /// Reverse the most recently applied move.
    ///
    /// `mv` must be the move on top of the history.
    pub fn undo(&mut self, mv: &Move) {
        debug_assert_eq!(self.history.last(), Some(mv), "undo out of LIFO order");
        self.history.pop();
        if let Some(detail) = self.detail_stack.pop() {
            self.detail = detail;
        }
        self.white_to_move = !self.white_to_move;

        let mover = self.side_to_move();
        let victim = mv.captured().map(|piece| (mover.opponent(), piece));
        let (from, to) = (mv.from(), mv.to());
        match mv.special() {
            Special::None | Special::KingMove => {
                self.set(from, self.piece_at(to));
                self.set(to, victim);
            }
            Special::PromoteQueen
            | Special::PromoteRook
            | Special::PromoteBishop
            | Special::PromoteKnight => {
                self.set(from, Some((mover, Piece::Pawn)));
                self.set(to, victim);
            }
            Special::WhiteEnPassant | Special::BlackEnPassant => {
                self.set(from, Some((mover, Piece::Pawn)));
                self.set(to, None);
                if let Some(sq) = en_passant_victim(mv) {
                    self.set(sq, Some((mover.opponent(), Piece::Pawn)));
                }
            }
            Special::WhiteDoubleAdvance | Special::BlackDoubleAdvance => {
                self.relocate(to, from);
            }
            Special::WhiteCastleKingside
            | Special::WhiteCastleQueenside
            | Special::BlackCastleKingside
            | Special::BlackCastleQueenside => {
                if let Some((king_from, king_to, rook_from, rook_to)) =
                    castling_squares(mv.special())
                {
                    self.relocate(king_to, king_from);
                    self.relocate(rook_to, rook_from);
                }
            }
        }
    }

    /// Apply a move as a game move, updating the half-move clock and the
    /// full-move number. No legality check; see `play_uci` / `play_san` or
    /// the game facade for validated input.
    pub fn play_move(&mut self, mv: &Move) {
        let mover = self.side_to_move();
        let pawn_move = matches!(self.piece_at(mv.from()), Some((_, Piece::Pawn)));
        self.apply(mv);
        if pawn_move || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        debug!(
            "played {mv} ({mover}), halfmove clock {}, fullmove {}",
            self.halfmove_clock, self.fullmove_number
        );
    }

    fn relocate(&mut self, from: Square, to: Square) {
        let cell = self.piece_at(from);
        self.set(to, cell);
        self.set(from, None);
    }
}
