use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use typometer::compare::compare;
use typometer::config::SpeedModel;
use typometer::layouts::{KnownLayout, Layout};
use typometer::sim;

fn bench_engine(c: &mut Criterion) {
    let layout = Layout::builtin(KnownLayout::Qwerty);
    let model = SpeedModel::default();

    let text = "the quick brown fox jumps over the lazy dog ".repeat(50);
    c.bench_function("simulate_pangram_x50", |b| {
        b.iter(|| sim::simulate(black_box(&layout), black_box(&text)))
    });

    let corpus = "the quick brown fox jumps over the lazy dog\n".repeat(200);
    c.bench_function("compare_200_lines_sequential", |b| {
        b.iter(|| compare(black_box(&layout), black_box(&corpus), &model, false))
    });
    c.bench_function("compare_200_lines_parallel", |b| {
        b.iter(|| compare(black_box(&layout), black_box(&corpus), &model, true))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
