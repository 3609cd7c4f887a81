use std::process::Command;
use std::thread;

use chess_rules::board::{DrawKind, MoveRejection, RulesError, Square};
use chess_rules::game::{Game, GameStatus, SharedGame};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

#[test]
fn board_reader_and_engine_agree() {
    let shared = SharedGame::new(Game::new());

    // The board reader drags a pawn, the engine answers in UCI.
    let reader_move = shared.validate(sq("e2"), sq("e4")).unwrap();
    shared.with(|game| game.play(reader_move)).unwrap();

    let engine = shared.clone();
    thread::spawn(move || engine.play_uci("c7c5").unwrap())
        .join()
        .unwrap();

    assert_eq!(
        shared.to_fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
    );
    assert!(shared.legal_moves_uci().contains(&"g1f3".to_string()));
}

#[test]
fn rejected_move_reports_notation() {
    let mut game = Game::new();
    match game.play_uci("e2e5") {
        Err(RulesError::InvalidMove { notation, reason }) => {
            assert_eq!(notation, "e2e5");
            assert!(matches!(reason, MoveRejection::Uci(_)));
        }
        other => panic!("expected invalid move, got {other:?}"),
    }
    match game.play_san("Qh5") {
        Err(RulesError::InvalidMove { notation, .. }) => assert_eq!(notation, "Qh5"),
        other => panic!("expected invalid move, got {other:?}"),
    }
    assert_eq!(game.position().history().len(), 0);
}

#[test]
fn malformed_san_is_rejected_not_panicking() {
    let shared = SharedGame::new(Game::new());
    for text in ["€8Q", "€8=Q", "é€1N"] {
        assert!(matches!(
            shared.play_san(text),
            Err(RulesError::InvalidMove {
                reason: MoveRejection::San(_),
                ..
            })
        ));
    }
    assert_eq!(shared.with(|game| game.position().history().len()), 0);
}

#[test]
fn fifty_move_rule_reached_by_play() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 98 60").unwrap();
    assert_eq!(game.status(), GameStatus::Ongoing);
    game.play_uci("a1a2").unwrap();
    game.play_uci("e8d8").unwrap();
    assert_eq!(game.position().halfmove_clock(), 100);
    assert_eq!(game.status(), GameStatus::Draw(DrawKind::FiftyMove));

    game.take_back();
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn position_status_binary_reports_mate() {
    let exe = env!("CARGO_BIN_EXE_position_status");
    let output = Command::new(exe)
        .args(["f2f3", "e5", "g4", "Qh4#"])
        .output()
        .expect("failed to run position_status");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fen: rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"));
    assert!(stdout.contains("status: Checkmate { winner: Black }"));
    assert!(stdout.contains("legal_moves: 0"));
}

#[test]
fn position_status_binary_rejects_bad_move() {
    let exe = env!("CARGO_BIN_EXE_position_status");
    let output = Command::new(exe)
        .args(["e2e4", "Ke3"])
        .output()
        .expect("failed to run position_status");
    assert!(!output.status.success());
}
