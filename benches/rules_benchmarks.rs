//! Benchmarks for the rules core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn load(fen: &str) -> Position {
    Position::from_fen(fen).expect("benchmark FEN should load")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut kiwipete = load(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::new();
    group.bench_function("pseudo_legal_startpos", |b| {
        b.iter(|| black_box(startpos.generate_pseudo_legal()))
    });

    let mut middlegame =
        load("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("legal_middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_legal()))
    });

    let mut kiwipete = load(KIWIPETE);
    group.bench_function("legal_kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_legal()))
    });

    group.finish();
}

fn bench_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");

    let mut kiwipete = load(KIWIPETE);
    let moves = kiwipete.generate_legal();
    group.bench_function("san_all_moves", |b| {
        b.iter(|| {
            for mv in &moves {
                black_box(kiwipete.move_to_san(mv).ok());
            }
        })
    });

    group.bench_function("parse_san", |b| {
        b.iter(|| black_box(kiwipete.parse_san(black_box("Nxf7")).ok()))
    });

    group.bench_function("resolve_uci", |b| {
        b.iter(|| black_box(kiwipete.resolve_uci(black_box("e1g1")).ok()))
    });

    group.finish();
}

fn bench_draws(c: &mut Criterion) {
    let mut pos = Position::new();
    for _ in 0..10 {
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            pos.play_uci(uci).expect("shuffle move should be legal");
        }
    }
    c.bench_function("repetition_count_40_plies", |b| {
        b.iter(|| black_box(pos.repetition_count()))
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_notation, bench_draws);
criterion_main!(benches);
