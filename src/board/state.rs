use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{CastlingRights, Color, Move, Piece, Square};

/// Square contents: empty, or a piece of one color.
pub type Cell = Option<(Color, Piece)>;

/// The part of a position a move changes besides the squares and the side to
/// move. One snapshot is stacked per applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detail {
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
}

impl Detail {
    #[must_use]
    pub const fn king(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[must_use]
    pub const fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// En-passant target square left by the last double advance
    #[must_use]
    pub const fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub(crate) fn set_king(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }
}

/// A chess position with its move history.
///
/// `history` and `detail_stack` always have the same length: `apply` pushes
/// one of each and `undo` pops one of each. The king squares in `detail` are
/// kept up to date incrementally and only rescanned when a position is built
/// from an external layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Cell; 64],
    pub(crate) white_to_move: bool,
    pub(crate) detail: Detail,
    pub(crate) history: Vec<Move>,
    pub(crate) detail_stack: Vec<Detail>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut pos = Position::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            pos.squares[file] = Some((Color::Black, *piece));
            pos.squares[8 + file] = Some((Color::Black, Piece::Pawn));
            pos.squares[48 + file] = Some((Color::White, Piece::Pawn));
            pos.squares[56 + file] = Some((Color::White, *piece));
        }
        pos.detail.castling = CastlingRights::all();
        pos
    }

    /// A board with no pieces. Kings default to e1/e8 until placed.
    pub(crate) fn empty() -> Self {
        Position {
            squares: [None; 64],
            white_to_move: true,
            detail: Detail {
                white_king: Square::E1,
                black_king: Square::E8,
                castling: CastlingRights::none(),
                en_passant: None,
            },
            history: Vec::new(),
            detail_stack: Vec::new(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn is_piece(&self, sq: Square, color: Color, piece: Piece) -> bool {
        self.squares[sq.index()] == Some((color, piece))
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.squares[sq.index()] = cell;
    }

    /// The 64 squares, a8 first and h1 last
    #[must_use]
    pub fn squares(&self) -> &[Cell; 64] {
        &self.squares
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        Color::from_white(self.white_to_move)
    }

    #[must_use]
    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.detail.king(color)
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.detail.castling
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.detail.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves applied since the position was set up, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Rescan the board for kings and record their squares. Returns the number
    /// of kings found per color, White first.
    pub(crate) fn locate_kings(&mut self) -> [usize; 2] {
        let mut found = [0usize; 2];
        for sq in Square::all() {
            if let Some((color, Piece::King)) = self.piece_at(sq) {
                found[color.index()] += 1;
                self.detail.set_king(color, sq);
            }
        }
        trace!("located kings {found:?}: {:?}", (self.detail.white_king, self.detail.black_king));
        found
    }
}
