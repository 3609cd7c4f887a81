//! Error types for position setup and move input.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// FEN string has more than the six standard fields
    TooManyParts { found: usize },
    /// Piece placement does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank describes more or fewer than eight files
    BadRankLength { rank: usize, files: usize },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::TooManyParts { found } => {
                write!(f, "FEN must have at most 6 parts, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate (UCI) move input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { notation: String },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { notation: String, char: char },
    /// No legal move in the current position matches
    IllegalMove { notation: String },
    /// More than one legal move matches
    AmbiguousMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { notation } => {
                write!(
                    f,
                    "Move must be 4-5 characters, found {} in '{notation}'",
                    notation.chars().count()
                )
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { notation, char } => {
                write!(f, "Invalid promotion piece '{char}' in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveParseError::AmbiguousMove { notation } => {
                write!(f, "Ambiguous move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0-63
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for SAN (Standard Algebraic Notation) failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// Text does not fit any accepted move shape
    Malformed { san: String },
    /// Ambiguous move (multiple legal moves fit)
    AmbiguousMove { san: String },
    /// No matching legal move found
    NoMatchingMove { san: String },
    /// Invalid promotion piece
    InvalidPromotion { san: String, char: char },
    /// Move passed for SAN generation is not legal here
    IllegalMove { uci: String },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::Malformed { san } => {
                write!(f, "Malformed SAN '{san}'")
            }
            SanError::AmbiguousMove { san } => {
                write!(f, "Ambiguous move '{san}'")
            }
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
            SanError::InvalidPromotion { san, char } => {
                write!(f, "Invalid promotion piece '{char}' in '{san}'")
            }
            SanError::IllegalMove { uci } => {
                write!(f, "Move '{uci}' is not legal in this position")
            }
        }
    }
}

impl std::error::Error for SanError {}

/// One structural defect of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalReason {
    /// Not exactly one king per side
    NotOneKingEach,
    /// The side that just moved left its king attacked
    OpponentKingAttacked,
    WhiteTooManyPieces,
    BlackTooManyPieces,
    WhiteTooManyPawns,
    BlackTooManyPawns,
    /// A pawn stands on the first or eighth rank
    PawnOnBackRank,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalReason::NotOneKingEach => "each side must have exactly one king",
            IllegalReason::OpponentKingAttacked => "side not to move is in check",
            IllegalReason::WhiteTooManyPieces => "white has too many pieces",
            IllegalReason::BlackTooManyPieces => "black has too many pieces",
            IllegalReason::WhiteTooManyPawns => "white has more than 8 pawns",
            IllegalReason::BlackTooManyPawns => "black has more than 8 pawns",
            IllegalReason::PawnOnBackRank => "pawn on first or last rank",
        };
        f.write_str(text)
    }
}

/// A supplied position failed structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalPosition {
    reasons: Vec<IllegalReason>,
}

impl IllegalPosition {
    pub(crate) fn new(reasons: Vec<IllegalReason>) -> Self {
        IllegalPosition { reasons }
    }

    /// Every defect found, in check order
    #[must_use]
    pub fn reasons(&self) -> &[IllegalReason] {
        &self.reasons
    }

    #[must_use]
    pub fn contains(&self, reason: IllegalReason) -> bool {
        self.reasons.contains(&reason)
    }
}

impl fmt::Display for IllegalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal position: ")?;
        for (i, reason) in self.reasons.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{reason}")?;
        }
        Ok(())
    }
}

impl std::error::Error for IllegalPosition {}

/// Why a move string or move value was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    Uci(MoveParseError),
    San(SanError),
    /// A `Move` value that is not among the legal moves
    NotLegal,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::Uci(err) => write!(f, "{err}"),
            MoveRejection::San(err) => write!(f, "{err}"),
            MoveRejection::NotLegal => write!(f, "not a legal move"),
        }
    }
}

/// Top-level error for the rules core and its game facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A move did not resolve to exactly one legal move
    InvalidMove {
        notation: String,
        reason: MoveRejection,
    },
    IllegalPosition(IllegalPosition),
    Fen(FenError),
}

impl RulesError {
    pub(crate) fn invalid_move(notation: impl Into<String>, reason: MoveRejection) -> Self {
        RulesError::InvalidMove {
            notation: notation.into(),
            reason,
        }
    }
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::InvalidMove { notation, reason } => {
                write!(f, "Invalid move '{notation}': {reason}")
            }
            RulesError::IllegalPosition(err) => write!(f, "{err}"),
            RulesError::Fen(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RulesError::InvalidMove {
                reason: MoveRejection::Uci(err),
                ..
            } => Some(err),
            RulesError::InvalidMove {
                reason: MoveRejection::San(err),
                ..
            } => Some(err),
            RulesError::InvalidMove { .. } => None,
            RulesError::IllegalPosition(err) => Some(err),
            RulesError::Fen(err) => Some(err),
        }
    }
}

impl From<IllegalPosition> for RulesError {
    fn from(err: IllegalPosition) -> Self {
        RulesError::IllegalPosition(err)
    }
}

impl From<FenError> for RulesError {
    fn from(err: FenError) -> Self {
        RulesError::Fen(err)
    }
}

impl From<MoveParseError> for RulesError {
    fn from(err: MoveParseError) -> Self {
        let notation = match &err {
            MoveParseError::InvalidLength { notation }
            | MoveParseError::InvalidSquare { notation }
            | MoveParseError::InvalidPromotion { notation, .. }
            | MoveParseError::IllegalMove { notation }
            | MoveParseError::AmbiguousMove { notation } => notation.clone(),
        };
        RulesError::invalid_move(notation, MoveRejection::Uci(err))
    }
}

impl From<SanError> for RulesError {
    fn from(err: SanError) -> Self {
        let notation = match &err {
            SanError::Empty => String::new(),
            SanError::Malformed { san }
            | SanError::AmbiguousMove { san }
            | SanError::NoMatchingMove { san }
            | SanError::InvalidPromotion { san, .. } => san.clone(),
            SanError::IllegalMove { uci } => uci.clone(),
        };
        RulesError::invalid_move(notation, MoveRejection::San(err))
    }
}
