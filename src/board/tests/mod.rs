//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Apply/undo correctness and move counters
//! - `edge_cases.rs` - Castling, en passant, promotion and terminal corners
//! - `notation.rs` - UCI and SAN resolution against generated moves
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Move, Position, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn play_all(pos: &mut Position, moves: &[&str]) {
    for uci in moves {
        pos.play_uci(uci)
            .unwrap_or_else(|err| panic!("{uci} should be legal: {err}"));
    }
}

pub(super) fn find_move(pos: &mut Position, from: &str, to: &str) -> Move {
    let (from, to) = (sq(from), sq(to));
    pos.generate_legal()
        .into_iter()
        .find(|m| m.from() == from && m.to() == to)
        .unwrap_or_else(|| panic!("expected legal move {from}{to}"))
}
