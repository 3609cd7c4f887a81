//! Draw adjudication: insufficient material, fifty-move rule, repetition.

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Detail;
use super::types::{Color, Move, Piece, Square};
use super::Position;

/// Why a position is drawn or drawable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawKind {
    /// Bare kings, or one minor piece against a bare king
    InsufficientAuto,
    /// The asking side's opponent has a lone king
    Insufficient,
    FiftyMove,
    Repetition,
}

impl Position {
    /// Fifty moves by each side without a pawn move or capture
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Insufficient-material draw, automatic or claimable.
    ///
    /// Automatic with no material besides kings, or a single knight or
    /// bishop. Otherwise the asking side may claim only when the opponent has
    /// a lone king. Two knights against a bare king stay a claim, not an
    /// automatic draw.
    #[must_use]
    pub fn insufficient_material(&self, white_asks: bool) -> Option<DrawKind> {
        let mut count = 0usize;
        let mut minor = false;
        let mut lone = [true; 2];
        for (color, piece) in self.squares.iter().flatten() {
            if *piece == Piece::King {
                continue;
            }
            count += 1;
            minor |= piece.is_minor();
            lone[color.index()] = false;
        }

        if count == 0 || (count == 1 && minor) {
            return Some(DrawKind::InsufficientAuto);
        }
        let opponent = Color::from_white(white_asks).opponent();
        lone[opponent.index()].then_some(DrawKind::Insufficient)
    }

    /// How many times the current position has occurred, counting itself.
    ///
    /// History is undone ply by ply back to the last pawn move or capture and
    /// the position restored afterwards. Positions whose castling or
    /// en-passant fields differ still match if the difference cannot change
    /// the available moves.
    pub fn repetition_count(&mut self) -> usize {
        let current_squares = self.squares;
        let current_white = self.white_to_move;
        let current_detail = self.detail;

        let mut plies = (self.fullmove_number.saturating_sub(1) as usize) * 2
            + usize::from(!self.white_to_move);
        plies = plies.min(self.history.len()).min(self.detail_stack.len());

        let mut matches = 0;
        let mut undone: Vec<Move> = Vec::with_capacity(plies);
        for _ in 0..plies {
            let Some(mv) = self.history.last().copied() else {
                break;
            };
            self.undo(&mv);
            undone.push(mv);

            if self.white_to_move == current_white
                && self.detail.white_king == current_detail.white_king
                && self.detail.black_king == current_detail.black_king
                && self.squares == current_squares
            {
                if self.detail == current_detail
                    || effective_detail(&self.squares, &self.detail)
                        == effective_detail(&current_squares, &current_detail)
                {
                    matches += 1;
                } else {
                    trace!("repeat of layout {} plies back differs in castling or en passant", undone.len());
                }
            }

            let pawn_move = matches!(self.piece_at(mv.from()), Some((_, Piece::Pawn)));
            if pawn_move || mv.is_capture() {
                break;
            }
        }

        for mv in undone.iter().rev() {
            self.apply(mv);
        }
        debug_assert_eq!(self.squares, current_squares);
        debug_assert_eq!(self.detail, current_detail);

        matches + 1
    }

    pub fn is_threefold_repetition(&mut self) -> bool {
        self.repetition_count() >= 3
    }

    /// Draw check in fixed order: insufficient material, fifty-move rule,
    /// threefold repetition. `white_asks` names the side claiming.
    pub fn draw_status(&mut self, white_asks: bool) -> Option<DrawKind> {
        let kind = self
            .insufficient_material(white_asks)
            .or_else(|| self.is_fifty_move_draw().then_some(DrawKind::FiftyMove))
            .or_else(|| self.is_threefold_repetition().then_some(DrawKind::Repetition));
        if let Some(kind) = kind {
            debug!("draw available: {kind:?}");
        }
        kind
    }

    /// Castling flags reduced to what the board still allows, in FEN order.
    pub(crate) fn effective_castling(&self) -> [bool; 4] {
        effective_castling(&self.squares, &self.detail)
    }
}

type Squares = [Option<(Color, Piece)>; 64];

/// En passant target only if an enemy pawn stands ready to take.
fn real_en_passant(squares: &Squares, target: Option<Square>) -> Option<Square> {
    let ep = target?;
    let (capturer, behind) = match ep.rank() {
        5 => (Color::White, -1),
        2 => (Color::Black, 1),
        _ => return None,
    };
    let ready = [-1, 1].into_iter().any(|df| {
        ep.offset(df, behind)
            .is_some_and(|sq| squares[sq.index()] == Some((capturer, Piece::Pawn)))
    });
    ready.then_some(ep)
}

fn effective_castling(squares: &Squares, detail: &Detail) -> [bool; 4] {
    let has = |sq: Square, color: Color, piece: Piece| squares[sq.index()] == Some((color, piece));
    let rights = detail.castling;
    let white_home = has(Square::E1, Color::White, Piece::King);
    let black_home = has(Square::E8, Color::Black, Piece::King);
    [
        white_home && has(Square::H1, Color::White, Piece::Rook) && rights.has(Color::White, true),
        white_home && has(Square::A1, Color::White, Piece::Rook) && rights.has(Color::White, false),
        black_home && has(Square::H8, Color::Black, Piece::Rook) && rights.has(Color::Black, true),
        black_home && has(Square::A8, Color::Black, Piece::Rook) && rights.has(Color::Black, false),
    ]
}

fn effective_detail(squares: &Squares, detail: &Detail) -> (Option<Square>, [bool; 4]) {
    (
        real_en_passant(squares, detail.en_passant),
        effective_castling(squares, detail),
    )
}
