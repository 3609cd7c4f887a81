use serde::Deserialize;

use chess_rules::board::Position;
use chess_rules::game::{Game, GameStatus};

#[derive(Deserialize)]
struct Fixture {
    perft: Vec<PerftCase>,
    positions: Vec<PositionCase>,
    mates: Vec<MateCase>,
    games: Vec<GameCase>,
}

#[derive(Deserialize)]
struct PerftCase {
    name: String,
    fen: String,
    nodes: Vec<u64>,
}

#[derive(Deserialize)]
struct PositionCase {
    fen: String,
    legal: usize,
    check: bool,
    status: String,
}

#[derive(Deserialize)]
struct MateCase {
    fen: String,
    uci: String,
    san: String,
}

#[derive(Deserialize)]
struct GameCase {
    san: Vec<String>,
    fen: String,
}

fn fixture() -> Fixture {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Ongoing => "ongoing",
        GameStatus::Checkmate { .. } => "checkmate",
        GameStatus::Stalemate => "stalemate",
        GameStatus::Draw(_) => "draw",
        GameStatus::Illegal => "illegal",
    }
}

#[test]
fn perft_suite() {
    for case in fixture().perft {
        let mut pos = Position::from_fen(&case.fen).expect("fixture FEN should load");
        for (depth, expected) in (1u32..).zip(&case.nodes) {
            assert_eq!(
                pos.perft(depth),
                *expected,
                "perft({depth}) mismatch for {}",
                case.name
            );
        }
    }
}

#[test]
fn position_status_suite() {
    for case in fixture().positions {
        let mut game = Game::from_fen(&case.fen).expect("fixture FEN should load");
        assert_eq!(game.legal_moves().len(), case.legal, "legal moves in {}", case.fen);
        assert_eq!(game.position().is_check(), case.check, "check in {}", case.fen);
        assert_eq!(status_name(game.status()), case.status, "status of {}", case.fen);
    }
}

#[test]
fn mate_in_one_suite() {
    for case in fixture().mates {
        let mut pos = Position::from_fen(&case.fen).expect("fixture FEN should load");
        let mv = pos.resolve_uci(&case.uci).expect("mating move should be legal");
        assert_eq!(pos.move_to_san(&mv).unwrap(), case.san, "SAN in {}", case.fen);
        assert_eq!(pos.parse_san(&case.san).unwrap(), mv);

        pos.play_move(&mv);
        assert!(pos.is_checkmate(), "{} should mate in {}", case.uci, case.fen);
    }
}

#[test]
fn san_game_suite() {
    for case in fixture().games {
        let mut game = Game::new();
        for san in &case.san {
            game.play_san(san)
                .unwrap_or_else(|err| panic!("{san} should be legal: {err}"));
        }
        assert_eq!(game.to_fen(), case.fen);

        // The same game replayed from the generated SAN.
        let mut replay = Game::new();
        let mut pos = Position::new();
        for san in &case.san {
            let mv = pos.parse_san(san).unwrap();
            let written = pos.move_to_san(&mv).unwrap();
            replay.play_san(&written).unwrap();
            pos.play_move(&mv);
        }
        assert_eq!(replay.to_fen(), case.fen);
    }
}
