//! Coordinate move notation ("e2e4", "e7e8q").

use std::fmt;
use std::str::FromStr;

use super::error::{MoveParseError, RulesError};
use super::types::{Move, Piece, Square};
use super::Position;

/// Coordinates of a move as written, before it is matched against a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl FromStr for UciMove {
    type Err = MoveParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = notation.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(MoveParseError::InvalidLength {
                notation: notation.to_string(),
            });
        }

        let square = |file: char, rank: char| -> Result<Square, MoveParseError> {
            let text: String = [file, rank].iter().collect();
            text.parse().map_err(|_| MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            })
        };
        let from = square(chars[0], chars[1])?;
        let to = square(chars[2], chars[3])?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => {
                    Some(piece)
                }
                _ => {
                    return Err(MoveParseError::InvalidPromotion {
                        notation: notation.to_string(),
                        char: c,
                    })
                }
            },
        };

        Ok(UciMove {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl Position {
    /// Resolve coordinate notation to the one legal move it names.
    ///
    /// Source and destination must match. If either the text or the
    /// candidate move involves a promotion, the promotion piece must match
    /// too, so "e7e8" does not resolve to a promotion.
    pub fn resolve_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let wanted: UciMove = notation.parse()?;
        let mut found = None;
        for mv in self.generate_legal() {
            if mv.from() != wanted.from || mv.to() != wanted.to {
                continue;
            }
            if (mv.is_promotion() || wanted.promotion.is_some())
                && mv.promotion() != wanted.promotion
            {
                continue;
            }
            if found.is_some() {
                return Err(MoveParseError::AmbiguousMove {
                    notation: notation.to_string(),
                });
            }
            found = Some(mv);
        }
        found.ok_or_else(|| MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })
    }

    /// Resolve and play a coordinate-notation move. The position is untouched
    /// on error.
    pub fn play_uci(&mut self, notation: &str) -> Result<Move, RulesError> {
        let mv = self.resolve_uci(notation)?;
        self.play_move(&mv);
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        let mv: UciMove = "e7e8q".parse().unwrap();
        assert_eq!(mv.from.to_string(), "e7");
        assert_eq!(mv.to, Square::E8);
        assert_eq!(mv.promotion, Some(Piece::Queen));
        assert_eq!(mv.to_string(), "e7e8q");

        let upper: UciMove = "a2a1N".parse().unwrap();
        assert_eq!(upper.promotion, Some(Piece::Knight));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "e2e".parse::<UciMove>(),
            Err(MoveParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            "e2i4".parse::<UciMove>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "e7e8k".parse::<UciMove>(),
            Err(MoveParseError::InvalidPromotion { char: 'k', .. })
        ));
    }

    #[test]
    fn test_resolve_needs_promotion_letter() {
        let mut pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        assert!(matches!(
            pos.resolve_uci("e7e8"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        let mv = pos.resolve_uci("e7e8r").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Rook));
    }

    #[test]
    fn test_rejected_move_leaves_position_unchanged() {
        let mut pos = Position::new();
        let before = pos.clone();
        assert!(pos.play_uci("e2e5").is_err());
        assert_eq!(pos, before);
        pos.play_uci("e2e4").unwrap();
        assert_eq!(pos.en_passant_target().map(|s| s.to_string()), Some("e3".to_string()));
    }
}
