//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_minimax::board::{
    best_move, Color, Evaluator, Piece, Position, PositionBuilder, SearchConfig,
};

/// A middlegame-ish position with sliders, a capture, and castling rights
fn tactical_position() -> Position {
    let sq = |s: &str| s.parse().unwrap();
    PositionBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("d1"), Color::White, Piece::Queen)
        .piece(sq("c4"), Color::White, Piece::Bishop)
        .piece(sq("f3"), Color::White, Piece::Knight)
        .piece(sq("e4"), Color::White, Piece::Pawn)
        .piece(sq("d2"), Color::White, Piece::Pawn)
        .piece(sq("e8"), Color::Black, Piece::King)
        .piece(sq("a8"), Color::Black, Piece::Rook)
        .piece(sq("d8"), Color::Black, Piece::Queen)
        .piece(sq("c5"), Color::Black, Piece::Bishop)
        .piece(sq("f6"), Color::Black, Piece::Knight)
        .piece(sq("e5"), Color::Black, Piece::Pawn)
        .piece(sq("d7"), Color::Black, Piece::Pawn)
        .all_castling_rights()
        .build()
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::starting();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.moves_for(Color::White)))
    });

    let middlegame = tactical_position();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.moves_for(Color::White)))
    });

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    let mut position = Position::starting();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| position.perft(black_box(Color::White), depth))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");
    let evaluator = Evaluator::new(Color::White);

    let positions = [
        ("startpos", Position::starting()),
        ("middlegame", tactical_position()),
    ];

    for (name, position) in positions {
        group.bench_with_input(
            BenchmarkId::new("position", name),
            &position,
            |b, position| b.iter(|| black_box(evaluator.evaluate(position))),
        );
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let evaluator = Evaluator::new(Color::White);

    for ply in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", ply), &ply, |b, &ply| {
            b.iter(|| {
                let mut position = Position::starting();
                let config = SearchConfig { ply_limit: ply };
                best_move(&mut position, &evaluator, &config)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_perft, bench_eval, bench_search);
criterion_main!(benches);
