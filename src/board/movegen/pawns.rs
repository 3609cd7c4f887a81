use super::super::geometry::{PAWN_ADVANCES, PAWN_CAPTURES};
use super::super::types::{Color, Move, MoveList, Piece, Special, Square, PROMOTION_PIECES};
use super::super::Position;

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let c = color.index();
        let promotes = from.rank() == color.pawn_seventh_rank();

        let advances = &PAWN_ADVANCES[c][from.index()];
        if let Some(&one) = advances.first() {
            if self.is_empty(one) {
                if promotes {
                    push_promotions(from, one, None, moves);
                } else {
                    moves.push(Move::new(from, one, Special::None, None));
                }
                if let Some(&two) = advances.get(1) {
                    if self.is_empty(two) {
                        moves.push(Move::new(from, two, Special::double_advance(color), None));
                    }
                }
            }
        }

        for &to in &PAWN_CAPTURES[c][from.index()] {
            match self.piece_at(to) {
                Some((owner, target)) if owner != color => {
                    if promotes {
                        push_promotions(from, to, Some(target), moves);
                    } else {
                        moves.push(Move::new(from, to, Special::None, Some(target)));
                    }
                }
                None if self.is_en_passant_capture(to, color) => {
                    moves.push(Move::new(
                        from,
                        to,
                        Special::en_passant(color),
                        Some(Piece::Pawn),
                    ));
                }
                _ => {}
            }
        }
    }

    /// `to` is the en-passant target and the pawn that just double-advanced
    /// is behind it.
    fn is_en_passant_capture(&self, to: Square, color: Color) -> bool {
        self.detail.en_passant == Some(to)
            && to
                .offset(0, -color.pawn_direction())
                .is_some_and(|victim| self.is_piece(victim, color.opponent(), Piece::Pawn))
    }
}

fn push_promotions(from: Square, to: Square, captured: Option<Piece>, moves: &mut MoveList) {
    for piece in PROMOTION_PIECES {
        if let Some(special) = Special::promotion_to(piece) {
            moves.push(Move::new(from, to, special, captured));
        }
    }
}
