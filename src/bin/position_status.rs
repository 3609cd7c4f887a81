use std::env;
use std::process::ExitCode;

use chess_rules::game::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let (mut game, moves) = match args.split_first() {
        Some((flag, rest)) if flag == "--fen" => {
            let Some((fen, moves)) = rest.split_first() else {
                eprintln!("usage: position_status [--fen \"<fen>\"] <move1> <move2> ...");
                return ExitCode::FAILURE;
            };
            match Game::from_fen(fen) {
                Ok(game) => (game, moves),
                Err(err) => {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => (Game::new(), &args[..]),
    };

    // Accept UCI first, then SAN.
    for text in moves {
        if game.play_uci(text).is_ok() {
            continue;
        }
        if let Err(err) = game.play_san(text) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    let status = game.status();
    println!("fen: {}", game.to_fen());
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {status:?}");
    println!("check: {}", game.position().is_check());
    let uci = game.legal_moves_uci();
    let san = game.legal_moves_san();
    println!("legal_moves: {}", uci.len());
    for (coords, algebraic) in uci.iter().zip(&san) {
        println!("{coords} {algebraic}");
    }
    ExitCode::SUCCESS
}
