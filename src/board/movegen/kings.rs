use super::super::geometry::{ATTACK_RAYS, KING_TARGETS, KNIGHT_TARGETS};
use super::super::types::{Color, Move, MoveList, Piece, Special, Square};
use super::super::Position;

/// Home squares for one castling option: king, rook, squares that must be
/// empty, squares the king touches (must be unattacked).
struct CastlePath {
    king: Square,
    rook: Square,
    kingside: bool,
    empty: &'static [Square],
    safe: [Square; 3],
    to: Square,
}

const CASTLE_PATHS: [(Color, CastlePath); 4] = [
    (
        Color::White,
        CastlePath {
            king: Square::E1,
            rook: Square::H1,
            kingside: true,
            empty: &[Square::F1, Square::G1],
            safe: [Square::E1, Square::F1, Square::G1],
            to: Square::G1,
        },
    ),
    (
        Color::White,
        CastlePath {
            king: Square::E1,
            rook: Square::A1,
            kingside: false,
            empty: &[Square::D1, Square::C1, Square::B1],
            safe: [Square::E1, Square::D1, Square::C1],
            to: Square::C1,
        },
    ),
    (
        Color::Black,
        CastlePath {
            king: Square::E8,
            rook: Square::H8,
            kingside: true,
            empty: &[Square::F8, Square::G8],
            safe: [Square::E8, Square::F8, Square::G8],
            to: Square::G8,
        },
    ),
    (
        Color::Black,
        CastlePath {
            king: Square::E8,
            rook: Square::A8,
            kingside: false,
            empty: &[Square::D8, Square::C8, Square::B8],
            safe: [Square::E8, Square::D8, Square::C8],
            to: Square::C8,
        },
    ),
];

impl Position {
    pub(crate) fn king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.index()] {
            if let Some(captured) = self.step_target(to, color) {
                moves.push(Move::new(from, to, Special::KingMove, captured));
            }
        }

        // Castling is fully checked here, including that the king is not in,
        // through or into check.
        let rights = self.detail.castling;
        for (owner, path) in &CASTLE_PATHS {
            if *owner != color || from != path.king || !rights.has(color, path.kingside) {
                continue;
            }
            if !self.is_piece(path.rook, color, Piece::Rook)
                || !path.empty.iter().all(|&sq| self.is_empty(sq))
            {
                continue;
            }
            if path.safe.iter().any(|&sq| self.is_attacked(sq, color.opponent())) {
                continue;
            }
            moves.push(Move::new(
                from,
                path.to,
                Special::castling(color, path.kingside),
                None,
            ));
        }
    }

    /// Is `sq` attacked by any piece of color `by`?
    ///
    /// Each ray from `sq` is walked to its first occupied square, which
    /// attacks only if its kind moves along that ray.
    #[must_use]
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        for ray in &ATTACK_RAYS[by.index()][sq.index()] {
            for &(step, attackers) in ray {
                if let Some((owner, piece)) = self.piece_at(step) {
                    if owner == by && attackers & piece.mask() != 0 {
                        return true;
                    }
                    break;
                }
            }
        }
        KNIGHT_TARGETS[sq.index()]
            .iter()
            .any(|&from| self.is_piece(from, by, Piece::Knight))
    }
}
