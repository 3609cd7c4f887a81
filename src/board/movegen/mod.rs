mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::types::{Color, Move, MoveList, Piece, Square};
use super::Position;

impl Position {
    /// Moves that follow piece movement rules for the side to move, before
    /// the king-safety filter. Squares are scanned from a8 to h1.
    #[must_use]
    pub fn generate_pseudo_legal(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move();
        for from in Square::all() {
            match self.piece_at(from) {
                Some((owner, piece)) if owner == color => {
                    self.piece_moves(from, color, piece, &mut moves);
                }
                _ => {}
            }
        }
        moves
    }

    /// Legal moves for the side to move.
    ///
    /// Each pseudo-legal move is applied, the mover's king tested, then the
    /// move undone, so the position is unchanged on return.
    pub fn generate_legal(&mut self) -> MoveList {
        let pseudo = self.generate_pseudo_legal();
        let mut legal = MoveList::new();
        for mv in pseudo {
            if self.leaves_king_safe(&mv) {
                legal.push(mv);
            } else {
                trace!("{mv} leaves the king attacked");
            }
        }
        legal
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            self.apply(&mv);
            nodes += self.perft(depth - 1);
            self.undo(&mv);
        }
        nodes
    }

    /// Apply, test the mover's king, undo.
    pub(crate) fn leaves_king_safe(&mut self, mv: &Move) -> bool {
        let mover = self.side_to_move();
        self.apply(mv);
        let safe = !self.is_attacked(self.king_square(mover), mover.opponent());
        self.undo(mv);
        safe
    }

    fn piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, moves),
            Piece::Knight => self.knight_moves(from, color, moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.slider_moves(from, color, piece, moves);
            }
            Piece::King => self.king_moves(from, color, moves),
        }
    }

    /// Target test shared by the single-step generators: `Some(captured)` if
    /// `to` is empty or holds an enemy piece, `None` if blocked by our own.
    pub(crate) fn step_target(&self, to: Square, color: Color) -> Option<Option<Piece>> {
        match self.piece_at(to) {
            None => Some(None),
            Some((owner, piece)) if owner != color => Some(Some(piece)),
            Some(_) => None,
        }
    }
}
