use std::str::FromStr;

use super::error::{FenError, RulesError};
use super::types::{CastlingRights, Color, Piece, Square};
use super::Position;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse FEN without structural validation.
    ///
    /// The half-move clock and full-move number may be omitted and default to
    /// 0 and 1. King squares are located by scanning the board.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        // FEN lists rank 8 first, which is also the order of square indices.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(file, 7 - row).ok_or(FenError::BadRankLength {
                    rank: 8 - row,
                    files: file + 1,
                })?;
                pos.set(sq, Some((color, piece)));
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: 8 - row,
                    files: file,
                });
            }
        }

        pos.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => rights.set(Color::White, true),
                    'Q' => rights.set(Color::White, false),
                    'k' => rights.set(Color::Black, true),
                    'q' => rights.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        pos.detail.castling = rights;

        pos.detail.en_passant = match parts[3] {
            "-" => None,
            text => {
                let invalid = || FenError::InvalidEnPassant {
                    found: text.to_string(),
                };
                let sq: Square = text.parse().map_err(|_| invalid())?;
                if sq.rank() != 2 && sq.rank() != 5 {
                    return Err(invalid());
                }
                Some(sq)
            }
        };

        let counter = |text: &str| {
            text.parse::<u32>().map_err(|_| FenError::InvalidCounter {
                found: text.to_string(),
            })
        };
        if let Some(text) = parts.get(4) {
            pos.halfmove_clock = counter(text)?;
        }
        if let Some(text) = parts.get(5) {
            pos.fullmove_number = counter(text)?.max(1);
        }

        pos.locate_kings();
        Ok(pos)
    }

    /// Parse FEN and reject structurally illegal positions.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let pos = Self::try_from_fen(fen)?;
        pos.validate()?;
        Ok(pos)
    }

    /// Convert the position to FEN.
    ///
    /// Castling rights are written only where king and rook still stand on
    /// their home squares.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let cell = Square::new(file, rank).and_then(|sq| self.piece_at(sq));
                if let Some((color, piece)) = cell {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = CastlingRights::none();
        let [wk, wq, bk, bq] = self.effective_castling();
        for (allowed, color, kingside) in [
            (wk, Color::White, true),
            (wq, Color::White, false),
            (bk, Color::Black, true),
            (bq, Color::Black, false),
        ] {
            if allowed {
                castling.set(color, kingside);
            }
        }
        let ep = self
            .detail
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_fen_matches_new() {
        let pos = Position::from_fen(STARTING_FEN).unwrap();
        assert_eq!(pos, Position::new());
        assert_eq!(Position::new().to_fen(), STARTING_FEN);
    }

    #[test]
    fn test_round_trip_after_moves() {
        let mut pos = Position::new();
        for uci in ["e2e4", "c7c5", "g1f3"] {
            pos.play_uci(uci).unwrap();
        }
        let fen = pos.to_fen();
        assert_eq!(
            fen,
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        let parsed = Position::from_fen(&fen).unwrap();
        assert_eq!(parsed.to_fen(), fen);
    }

    #[test]
    fn test_optional_counters() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
        assert_eq!(pos.side_to_move(), Color::Black);
    }

    #[test]
    fn test_kings_located() {
        let pos = Position::from_fen("8/8/8/3k4/8/8/8/6K1 w - - 0 1").unwrap();
        assert_eq!(pos.king_square(Color::White), Square::G1);
        assert_eq!(pos.king_square(Color::Black).to_string(), "d5");
    }

    #[test]
    fn test_stale_castling_flag_not_written() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1").unwrap();
        assert!(pos.castling_rights().has(Color::White, false));
        assert!(pos.to_fen().contains(" w K - "));
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Position::try_from_fen("8/8/8 w - -"),
            Err(FenError::WrongRankCount { found: 3 })
        );
        assert!(matches!(
            Position::try_from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"),
            Err(FenError::BadRankLength { rank: 7, .. })
        ));
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - -"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - e4"),
            Err(FenError::InvalidEnPassant {
                found: "e4".to_string()
            })
        );
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Err(FenError::InvalidCounter { .. })
        ));
        assert!(matches!(
            Position::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
            Err(RulesError::IllegalPosition(_))
        ));
    }
}
