use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chess_core::agent::ai::{evaluate, iterative_deepening, Searcher};
use chess_core::game_repr::Position;

const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP2BPPP/R2QKB1R w KQ - 2 8";

fn bench_evaluate(c: &mut Criterion) {
    let pos = Position::from_fen(MIDDLEGAME).unwrap();
    c.bench_function("evaluate middlegame", |b| b.iter(|| black_box(evaluate(&pos))));
}

fn bench_alpha_beta_depth_3(c: &mut Criterion) {
    let pos = Position::from_fen(MIDDLEGAME).unwrap();
    c.bench_function("search_root depth 3", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new(&pos, &[], None);
            black_box(searcher.search_root(3, None))
        })
    });
}

fn bench_iterative_deepening(c: &mut Criterion) {
    let pos = Position::new();
    let mut group = c.benchmark_group("deep");
    group.sample_size(10);
    group.bench_function("iterative deepening depth 4", |b| {
        b.iter(|| black_box(iterative_deepening(&pos, &[], Duration::from_secs(60), 4)))
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_alpha_beta_depth_3, bench_iterative_deepening);
criterion_main!(benches);
