use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use outflank_othello::test_utils::run_perft;
use outflank_othello::{Board, LocationList};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_moves(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("get_moves", |b| b.iter(|| black_box(board).get_moves()));
    c.bench_function("flip_all_empties", |b| {
        b.iter(|| {
            let board = black_box(board);
            LocationList::from(board.empty_squares())
                .filter(|&loc| !board.flips(loc).is_empty())
                .count()
        })
    });
}

#[cfg(unix)]
criterion_group! {
    name = perft;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_perft, criterion_moves
}

#[cfg(not(unix))]
criterion_group! {
    name = perft;
    config = Criterion::default();
    targets = criterion_perft, criterion_moves
}

criterion_main!(perft);
