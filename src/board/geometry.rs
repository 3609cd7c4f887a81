//! Precomputed move and attack geometry.
//!
//! Every table is indexed by `Square::index()` and built on first use. Edge
//! detection happens here once, so generation and attack tests only walk
//! lists of on-board squares.

use once_cell::sync::Lazy;

use super::types::{Color, Piece, Square};

/// Squares outward from an origin in one direction, up to the board edge.
pub(crate) type Ray = Vec<Square>;

/// Attack ray step: the square and the set of attacker kinds (piece masks)
/// that hit the origin from there when it is the first occupied square.
pub(crate) type AttackStep = (Square, u8);

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

fn steps(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(df, dr)| sq.offset(df, dr))
                .collect()
        })
        .collect()
}

fn ray(from: Square, df: isize, dr: isize) -> Ray {
    let mut out = Vec::with_capacity(7);
    let mut cur = from;
    while let Some(next) = cur.offset(df, dr) {
        out.push(next);
        cur = next;
    }
    out
}

fn rays(deltas: &[(isize, isize)]) -> Vec<Vec<Ray>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .map(|&(df, dr)| ray(sq, df, dr))
                .filter(|r| !r.is_empty())
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| steps(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    let all: Vec<(isize, isize)> = ORTHOGONAL.iter().chain(DIAGONAL.iter()).copied().collect();
    steps(&all)
});

pub(crate) static BISHOP_RAYS: Lazy<Vec<Vec<Ray>>> = Lazy::new(|| rays(&DIAGONAL));

pub(crate) static ROOK_RAYS: Lazy<Vec<Vec<Ray>>> = Lazy::new(|| rays(&ORTHOGONAL));

pub(crate) static QUEEN_RAYS: Lazy<Vec<Vec<Ray>>> = Lazy::new(|| {
    let all: Vec<(isize, isize)> = ORTHOGONAL.iter().chain(DIAGONAL.iter()).copied().collect();
    rays(&all)
});

/// Diagonal capture destinations of a pawn, by pawn color.
pub(crate) static PAWN_CAPTURES: Lazy<[Vec<Vec<Square>>; 2]> = Lazy::new(|| {
    Color::BOTH.map(|color| {
        let dir = color.pawn_direction();
        steps(&[(-1, dir), (1, dir)])
    })
});

/// Straight advances of a pawn, by pawn color: one square, then a second
/// square only from the home rank.
pub(crate) static PAWN_ADVANCES: Lazy<[Vec<Vec<Square>>; 2]> = Lazy::new(|| {
    Color::BOTH.map(|color| {
        let dir = color.pawn_direction();
        Square::all()
            .map(|sq| {
                let mut out = Vec::with_capacity(2);
                if let Some(one) = sq.offset(0, dir) {
                    out.push(one);
                    if sq.rank() == color.pawn_start_rank() {
                        if let Some(two) = one.offset(0, dir) {
                            out.push(two);
                        }
                    }
                }
                out
            })
            .collect()
    })
});

/// Rays outward from a target square, by attacker color, each step tagged
/// with the attacker kinds that reach the target along that ray.
pub(crate) static ATTACK_RAYS: Lazy<[Vec<Vec<Vec<AttackStep>>>; 2]> = Lazy::new(|| {
    Color::BOTH.map(|attacker| {
        // A white pawn attacks towards rank 8, so it sits one rank below.
        let pawn_rank_delta = -attacker.pawn_direction();
        Square::all()
            .map(|target| {
                let mut out = Vec::with_capacity(8);
                for &(df, dr) in ORTHOGONAL.iter() {
                    let slider = Piece::Rook.mask() | Piece::Queen.mask();
                    out.push(attack_ray(target, df, dr, slider, Piece::King.mask()));
                }
                for &(df, dr) in DIAGONAL.iter() {
                    let slider = Piece::Bishop.mask() | Piece::Queen.mask();
                    let mut adjacent = Piece::King.mask();
                    if dr == pawn_rank_delta {
                        adjacent |= Piece::Pawn.mask();
                    }
                    out.push(attack_ray(target, df, dr, slider, adjacent));
                }
                out.retain(|r| !r.is_empty());
                out
            })
            .collect()
    })
});

fn attack_ray(target: Square, df: isize, dr: isize, slider: u8, adjacent: u8) -> Vec<AttackStep> {
    ray(target, df, dr)
        .into_iter()
        .enumerate()
        .map(|(i, sq)| (sq, if i == 0 { slider | adjacent } else { slider }))
        .collect()
}
