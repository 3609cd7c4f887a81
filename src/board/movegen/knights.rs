use super::super::geometry::KNIGHT_TARGETS;
use super::super::types::{Color, Move, MoveList, Special, Square};
use super::super::Position;

impl Position {
    pub(crate) fn knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if let Some(captured) = self.step_target(to, color) {
                moves.push(Move::new(from, to, Special::None, captured));
            }
        }
    }
}
