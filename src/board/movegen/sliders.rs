use super::super::geometry::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS};
use super::super::types::{Color, Move, MoveList, Piece, Special, Square};
use super::super::Position;

impl Position {
    /// Bishop, rook and queen moves. Each ray stops at the first occupied
    /// square, which is included only when it holds an enemy piece.
    pub(crate) fn slider_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut MoveList) {
        let rays = match piece {
            Piece::Bishop => &BISHOP_RAYS[from.index()],
            Piece::Rook => &ROOK_RAYS[from.index()],
            _ => &QUEEN_RAYS[from.index()],
        };
        for ray in rays {
            for &to in ray {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, Special::None, None)),
                    Some((owner, target)) => {
                        if owner != color {
                            moves.push(Move::new(from, to, Special::None, Some(target)));
                        }
                        break;
                    }
                }
            }
        }
    }
}
