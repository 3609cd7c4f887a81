//! Property-based tests using proptest.

use crate::board::{Color, Position, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the initial position.
fn random_playout(seed: u64, num_moves: usize) -> Position {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = pos.generate_legal();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        pos.play_move(&mv);
    }
    pos
}

proptest! {
    /// Property: apply followed by undo restores the position exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = random_playout(seed, num_moves);
        let before = pos.clone();
        for mv in pos.generate_legal() {
            pos.apply(&mv);
            pos.undo(&mv);
            prop_assert_eq!(&pos, &before, "apply/undo of {} changed the position", mv);
        }
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = random_playout(seed, num_moves);
        let mover = pos.side_to_move();
        for mv in pos.generate_legal() {
            pos.apply(&mv);
            let king = pos.king_square(mover);
            prop_assert!(!pos.is_attacked(king, mover.opponent()),
                "Legal move left king in check: {}", mv);
            pos.undo(&mv);
        }
    }

    /// Property: recorded king squares match the board
    #[test]
    fn prop_king_squares_tracked(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves);
        for color in Color::BOTH {
            let king = pos.king_square(color);
            prop_assert_eq!(pos.piece_at(king), Some((color, crate::board::Piece::King)));
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_playout(seed, num_moves);
        let fen = pos.to_fen();
        let restored = Position::from_fen(&fen).unwrap();

        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.squares(), pos.squares());
        prop_assert_eq!(restored.side_to_move(), pos.side_to_move());
        prop_assert_eq!(restored.en_passant_target(), pos.en_passant_target());
    }

    /// Property: every legal move survives UCI and SAN text
    #[test]
    fn prop_notation_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = random_playout(seed, num_moves);
        for mv in pos.generate_legal() {
            prop_assert_eq!(pos.resolve_uci(&mv.to_uci()).unwrap(), mv);
            let san = pos.move_to_san(&mv).unwrap();
            prop_assert_eq!(pos.parse_san(&san).unwrap(), mv, "san {}", san);
        }
    }

    /// Property: perft(1) equals the legal move count
    #[test]
    fn prop_perft_one_counts_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = random_playout(seed, num_moves);
        let count = pos.generate_legal().len() as u64;
        prop_assert_eq!(pos.perft(1), count);
    }

    /// Property: squares parse back from their names
    #[test]
    fn prop_square_names(idx in 0..64usize) {
        let square = Square::from_index(idx).unwrap();
        prop_assert_eq!(square.to_string().parse::<Square>().unwrap(), square);
    }
}
