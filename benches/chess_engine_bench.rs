//! Chess Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.
//! Legal move lists and scores are cached per position, so the benchmarks that
//! measure them work on a fresh clone each iteration.

use chess_engine::{parse_move_notation, Color, Move, Position, Search, SearchConfig};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn opening() -> Position {
    let mut position = Position::new();
    for notation in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
        if let Ok((from, to)) = parse_move_notation(notation) {
            position.apply_move(Move::quiet(from, to), true);
        }
    }
    position
}

fn bench_new_position(c: &mut Criterion) {
    c.bench_function("new_position", |b| b.iter(|| black_box(Position::new())));
}

fn bench_legal_moves(c: &mut Criterion) {
    let position = opening();

    c.bench_function("legal_moves_opening", |b| {
        b.iter_batched(
            || position.clone(),
            |mut pos| black_box(pos.legal_moves(Color::White)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_score(c: &mut Criterion) {
    let position = opening();

    c.bench_function("relative_score_opening", |b| {
        b.iter_batched(
            || position.clone(),
            |mut pos| black_box(pos.relative_score(Color::White)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut position = opening();
    let moves = position.legal_moves(Color::White);

    c.bench_function("apply_undo_all_moves", |b| {
        b.iter(|| {
            for &mv in &moves {
                position.apply_move(mv, false);
                black_box(position.undo_move().ok());
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let position = opening();
    let mut group = c.benchmark_group("search_depth_2");
    group.sample_size(10);

    for parallel in [false, true] {
        let search = Search::new(SearchConfig {
            depth: 2,
            parallel,
            ..SearchConfig::default()
        });
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter_batched(
                || position.clone(),
                |mut pos| black_box(search.best_move(&mut pos, Color::White)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_new_position,
    bench_legal_moves,
    bench_score,
    bench_apply_undo,
    bench_search,
);
criterion_main!(benches);
