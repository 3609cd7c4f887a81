//! Standard Algebraic Notation (SAN) support.
//!
//! Output is the shortest unambiguous form ("e4", "Nbd2", "R1e2", "exd8=Q+",
//! "O-O-O#"). Input is tolerant: check and annotation marks, "e.p.", missing
//! "=" before a promotion letter, zeros for castling, "e2-e4" style source
//! squares and the two-letter pawn capture "ef" are all accepted.
//!
//! # Examples
//! ```
//! use chess_rules::board::Position;
//!
//! let mut pos = Position::new();
//! let mv = pos.parse_san("Nf3").unwrap();
//! assert_eq!(pos.move_to_san(&mv).unwrap(), "Nf3");
//! ```

use super::error::{RulesError, SanError};
use super::types::{Move, MoveList, Piece, Square};
use super::Position;

/// One lexical unit of a SAN move after suffixes are stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Piece(Piece),
    File(usize),
    Rank(usize),
    Capture,
    Separator,
}

/// What a SAN string pins down about the move it names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SanPattern {
    piece: Option<Piece>,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    to_file: Option<usize>,
    to_rank: Option<usize>,
    promotion: Option<Piece>,
}

impl SanPattern {
    fn full_squares(&self) -> bool {
        self.from_file.is_some()
            && self.from_rank.is_some()
            && self.to_file.is_some()
            && self.to_rank.is_some()
    }
}

/// Parsed SAN: castling side or a move pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SanShape {
    Castle { kingside: bool },
    Move(SanPattern),
}

/// Drop check, mate and annotation marks, then an "ep"/"e.p." suffix.
fn strip_suffixes(san: &str) -> &str {
    let mut text = san.trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
    for suffix in ["e.p", "ep"] {
        if text.len() > suffix.len() && text.to_ascii_lowercase().ends_with(suffix) {
            text = text[..text.len() - suffix.len()]
                .trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
            break;
        }
    }
    text
}

fn castling_side(text: &str) -> Option<bool> {
    let compact: String = text
        .chars()
        .filter(|&c| c != '-')
        .map(|c| if c == '0' { 'o' } else { c.to_ascii_lowercase() })
        .collect();
    match compact.as_str() {
        "oo" => Some(true),
        "ooo" => Some(false),
        _ => None,
    }
}

/// Split a trailing promotion piece off. The letter must follow "=" or a
/// first/last-rank digit; a bare lowercase "b" elsewhere stays a file.
fn split_promotion<'a>(san: &str, text: &'a str) -> Result<(&'a str, Option<Piece>), SanError> {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    if n < 2 {
        return Ok((text, None));
    }
    let (prev, last) = (chars[n - 2], chars[n - 1]);
    if !matches!(prev, '=' | '1' | '8') || !last.is_ascii_alphabetic() {
        if prev == '=' {
            return Err(SanError::Malformed {
                san: san.to_string(),
            });
        }
        return Ok((text, None));
    }
    let piece = match Piece::from_char(last) {
        Some(p @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => p,
        _ if prev == '=' => {
            return Err(SanError::InvalidPromotion {
                san: san.to_string(),
                char: last,
            })
        }
        _ => return Ok((text, None)),
    };
    let keep = if prev == '=' { n - 2 } else { n - 1 };
    Ok((&text[..keep], Some(piece)))
}

fn tokenize(san: &str, text: &str) -> Result<Vec<Token>, SanError> {
    text.chars()
        .map(|c| match c {
            'a'..='h' => Ok(Token::File(c as usize - 'a' as usize)),
            '1'..='8' => Ok(Token::Rank(c as usize - '1' as usize)),
            'x' | 'X' | ':' => Ok(Token::Capture),
            '-' => Ok(Token::Separator),
            'K' | 'Q' | 'R' | 'B' | 'N' | 'P' => Piece::from_char(c)
                .map(Token::Piece)
                .ok_or_else(|| SanError::Malformed {
                    san: san.to_string(),
                }),
            _ => Err(SanError::Malformed {
                san: san.to_string(),
            }),
        })
        .collect()
}

fn parse_shape(san: &str) -> Result<SanShape, SanError> {
    let trimmed = san.trim();
    if trimmed.is_empty() {
        return Err(SanError::Empty);
    }
    if !trimmed.is_ascii() {
        return Err(SanError::Malformed {
            san: san.to_string(),
        });
    }
    let text = strip_suffixes(trimmed);
    if let Some(kingside) = castling_side(text) {
        return Ok(SanShape::Castle { kingside });
    }

    let (body, promotion) = split_promotion(san, text)?;
    let mut tokens = tokenize(san, body)?;
    let malformed = || SanError::Malformed {
        san: san.to_string(),
    };

    let mut pattern = SanPattern {
        promotion,
        ..SanPattern::default()
    };
    if let Some(&Token::Piece(piece)) = tokens.first() {
        pattern.piece = Some(piece);
        tokens.remove(0);
    }
    if tokens.iter().any(|t| matches!(t, Token::Piece(_))) {
        return Err(malformed());
    }
    tokens.retain(|t| !matches!(t, Token::Capture | Token::Separator));

    let pawn_only = matches!(pattern.piece, None | Some(Piece::Pawn));
    match tokens.as_slice() {
        [Token::File(tf), Token::Rank(tr)] => {
            pattern.to_file = Some(*tf);
            pattern.to_rank = Some(*tr);
        }
        [Token::File(ff), Token::File(tf), Token::Rank(tr)] => {
            pattern.from_file = Some(*ff);
            pattern.to_file = Some(*tf);
            pattern.to_rank = Some(*tr);
        }
        [Token::Rank(fr), Token::File(tf), Token::Rank(tr)] => {
            pattern.from_rank = Some(*fr);
            pattern.to_file = Some(*tf);
            pattern.to_rank = Some(*tr);
        }
        [Token::File(ff), Token::Rank(fr), Token::File(tf), Token::Rank(tr)] => {
            pattern.from_file = Some(*ff);
            pattern.from_rank = Some(*fr);
            pattern.to_file = Some(*tf);
            pattern.to_rank = Some(*tr);
        }
        // Pawn capture shorthand: "ef", "e5f"
        [Token::File(ff), Token::File(tf)] if pawn_only && ff != tf => {
            pattern.from_file = Some(*ff);
            pattern.to_file = Some(*tf);
        }
        [Token::File(ff), Token::Rank(fr), Token::File(tf)] if pawn_only && ff != tf => {
            pattern.from_file = Some(*ff);
            pattern.from_rank = Some(*fr);
            pattern.to_file = Some(*tf);
        }
        _ => return Err(malformed()),
    }
    if pattern.promotion.is_some() && !pawn_only {
        return Err(malformed());
    }
    Ok(SanShape::Move(pattern))
}

impl Position {
    /// Resolve SAN text to the one legal move it names.
    ///
    /// Without a piece letter the mover must be a pawn, unless both source
    /// and destination squares are given. A promotion without a piece letter
    /// means a queen. Fails when no legal move or more than one fits.
    pub fn parse_san(&mut self, san: &str) -> Result<Move, SanError> {
        let shape = parse_shape(san)?;
        let legal = self.generate_legal();
        let mut found: Option<Move> = None;
        for mv in legal {
            let fits = match shape {
                SanShape::Castle { kingside } => {
                    mv.is_castling() && mv.special().is_kingside_castling() == kingside
                }
                SanShape::Move(pattern) => self.fits_pattern(&mv, &pattern),
            };
            if !fits {
                continue;
            }
            if found.is_some() {
                return Err(SanError::AmbiguousMove {
                    san: san.to_string(),
                });
            }
            found = Some(mv);
        }
        found.ok_or_else(|| SanError::NoMatchingMove {
            san: san.to_string(),
        })
    }

    /// Resolve and play a SAN move. The position is untouched on error.
    pub fn play_san(&mut self, san: &str) -> Result<Move, RulesError> {
        let mv = self.parse_san(san)?;
        self.play_move(&mv);
        Ok(mv)
    }

    /// Format a legal move in SAN, with "+" or "#" when it checks or mates.
    pub fn move_to_san(&mut self, mv: &Move) -> Result<String, SanError> {
        let legal = self.generate_legal();
        if !legal.contains(mv) {
            return Err(SanError::IllegalMove { uci: mv.to_uci() });
        }

        let mut san = self.san_body(mv, &legal);
        self.apply(mv);
        if self.is_check() {
            san.push(if self.has_legal_move() { '+' } else { '#' });
        }
        self.undo(mv);
        Ok(san)
    }

    fn fits_pattern(&self, mv: &Move, pattern: &SanPattern) -> bool {
        let Some((_, piece)) = self.piece_at(mv.from()) else {
            return false;
        };
        let full = pattern.full_squares();
        if mv.is_castling() && !full {
            return false;
        }
        match pattern.piece {
            Some(wanted) if wanted != piece => return false,
            None if !full && piece != Piece::Pawn => return false,
            _ => {}
        }
        let (from, to) = (mv.from(), mv.to());
        let coords = [
            (pattern.from_file, from.file()),
            (pattern.from_rank, from.rank()),
            (pattern.to_file, to.file()),
            (pattern.to_rank, to.rank()),
        ];
        if coords
            .iter()
            .any(|(given, actual)| given.is_some_and(|g| g != *actual))
        {
            return false;
        }
        match (pattern.promotion, mv.promotion()) {
            (Some(wanted), actual) => actual == Some(wanted),
            (None, actual) => matches!(actual, None | Some(Piece::Queen)),
        }
    }

    /// SAN without the check suffix: pawn form, castling, then piece forms
    /// with increasing disambiguation until one is unique.
    fn san_body(&self, mv: &Move, legal: &MoveList) -> String {
        if mv.is_castling() {
            let text = if mv.special().is_kingside_castling() {
                "O-O"
            } else {
                "O-O-O"
            };
            return text.to_string();
        }

        let piece = self.piece_at(mv.from()).map_or(Piece::Pawn, |(_, p)| p);
        let (from, to) = (mv.from(), mv.to());
        if piece == Piece::Pawn {
            let mut san = String::new();
            if from.file() != to.file() {
                san.push(from.file_char());
                san.push('x');
            }
            san.push_str(&to.to_string());
            if let Some(promo) = mv.promotion() {
                san.push('=');
                san.push(promo.to_san_char());
            }
            return san;
        }

        // Other moves by the same kind of piece to the same square.
        let rivals: Vec<Square> = legal
            .iter()
            .filter(|other| {
                other.to() == to
                    && other.from() != from
                    && !other.is_castling()
                    && matches!(self.piece_at(other.from()), Some((_, p)) if p == piece)
            })
            .map(|other| other.from())
            .collect();

        let disambiguation = if rivals.is_empty() {
            String::new()
        } else if rivals.iter().all(|sq| sq.file() != from.file()) {
            from.file_char().to_string()
        } else if rivals.iter().all(|sq| sq.rank() != from.rank()) {
            from.rank_char().to_string()
        } else {
            from.to_string()
        };

        let capture = if mv.is_capture() { "x" } else { "" };
        format!("{}{disambiguation}{capture}{to}", piece.to_san_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_moves() {
        let mut pos = Position::new();
        let mv = pos.parse_san("e4").unwrap();
        assert_eq!(mv.to_uci(), "e2e4");
        assert_eq!(pos.move_to_san(&mv).unwrap(), "e4");
    }

    #[test]
    fn test_castling_variants() {
        let mut pos =
            Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        for text in ["O-O", "o-o", "0-0", "OO", "O-O+"] {
            assert_eq!(pos.parse_san(text).unwrap().to_uci(), "e1g1", "{text}");
        }
        for text in ["O-O-O", "0-0-0", "ooo"] {
            assert_eq!(pos.parse_san(text).unwrap().to_uci(), "e1c1", "{text}");
        }
        let mv = pos.parse_san("O-O-O").unwrap();
        assert_eq!(pos.move_to_san(&mv).unwrap(), "O-O-O");
    }

    #[test]
    fn test_promotion_forms() {
        let mut pos = Position::from_fen("3r4/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        assert_eq!(pos.parse_san("e8=N").unwrap().promotion(), Some(Piece::Knight));
        assert_eq!(pos.parse_san("e8N").unwrap().promotion(), Some(Piece::Knight));
        assert_eq!(pos.parse_san("e8").unwrap().promotion(), Some(Piece::Queen));
        assert_eq!(pos.parse_san("exd8=R").unwrap().to_uci(), "e7d8r");
        assert_eq!(pos.parse_san("ed8b").unwrap().promotion(), Some(Piece::Bishop));
        assert!(matches!(
            pos.parse_san("e8=K"),
            Err(SanError::InvalidPromotion { char: 'K', .. })
        ));

        let mv = pos.parse_san("exd8=Q").unwrap();
        assert_eq!(pos.move_to_san(&mv).unwrap(), "exd8=Q");
    }

    #[test]
    fn test_pawn_capture_shorthand() {
        let mut pos =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        for text in ["exd5", "ed", "e4d5", "e4xd5", "exd"] {
            assert_eq!(pos.parse_san(text).unwrap().to_uci(), "e4d5", "{text}");
        }
    }

    #[test]
    fn test_en_passant_suffix() {
        let mut pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        for text in ["exd6", "exd6 e.p.", "exd6ep", "ed"] {
            let mv = pos.parse_san(text).unwrap();
            assert!(mv.is_en_passant(), "{text}");
        }
    }

    #[test]
    fn test_disambiguation() {
        // Knights on b1 and f1 both reach d2; rooks on a1 and a5 both reach a3.
        let mut pos = Position::from_fen("4k3/8/8/R7/8/8/8/RN2KN2 w - - 0 1").unwrap();
        let mv = pos.parse_san("Nbd2").unwrap();
        assert_eq!(mv.to_uci(), "b1d2");
        assert_eq!(pos.move_to_san(&mv).unwrap(), "Nbd2");
        assert!(matches!(
            pos.parse_san("Nd2"),
            Err(SanError::AmbiguousMove { .. })
        ));

        let mv = pos.parse_san("R1a3").unwrap();
        assert_eq!(mv.to_uci(), "a1a3");
        assert_eq!(pos.move_to_san(&mv).unwrap(), "R1a3");
    }

    #[test]
    fn test_full_square_disambiguation() {
        // Queens on a1, a3 and c1 all reach b2 and share files and ranks.
        let mut pos = Position::from_fen("4k3/8/8/8/8/Q7/8/Q1Q1K3 w - - 0 1").unwrap();
        let mv = pos.parse_san("Qa1b2").unwrap();
        assert_eq!(pos.move_to_san(&mv).unwrap(), "Qa1b2");
    }

    #[test]
    fn test_check_and_mate_suffix() {
        let mut pos = Position::new();
        for san in ["f3", "e5", "g4"] {
            pos.play_san(san).unwrap();
        }
        let mv = pos.parse_san("Qh4").unwrap();
        assert_eq!(pos.move_to_san(&mv).unwrap(), "Qh4#");

        let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let mv = pos.parse_san("Ra8+").unwrap();
        assert_eq!(pos.move_to_san(&mv).unwrap(), "Ra8+");
    }

    #[test]
    fn test_rejects_non_ascii_input() {
        let mut pos = Position::new();
        for text in ["€8Q", "€8=Q", "é€1N", "e4€", "Nf3†"] {
            assert!(
                matches!(pos.parse_san(text), Err(SanError::Malformed { .. })),
                "{text}"
            );
        }
        assert!(pos.play_san("€8=Q").is_err());
        assert_eq!(pos, Position::new());
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut pos = Position::new();
        assert_eq!(pos.parse_san("  "), Err(SanError::Empty));
        assert!(matches!(pos.parse_san("Zf3"), Err(SanError::Malformed { .. })));
        assert!(matches!(pos.parse_san("e5"), Err(SanError::NoMatchingMove { .. })));
        assert!(matches!(pos.parse_san("O-O"), Err(SanError::NoMatchingMove { .. })));
        assert!(matches!(pos.parse_san("Nf3=Q"), Err(SanError::Malformed { .. })));
        let illegal = Move::new(Square::E1, Square::E8, crate::board::Special::KingMove, None);
        assert!(matches!(
            pos.move_to_san(&illegal),
            Err(SanError::IllegalMove { .. })
        ));
    }
}
