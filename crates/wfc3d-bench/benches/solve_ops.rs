//! Criterion benchmarks for whole solves and single solver steps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wfc3d_bench::{reference_catalog, reference_config, stress_config};
use wfc3d_engine::StandardRunner;

/// Benchmark: build a runner (unwrap + initial propagation) on 1024 cells.
fn bench_runner_setup(c: &mut Criterion) {
    let catalog = reference_catalog();
    c.bench_function("runner_setup_16x16x4", |b| {
        b.iter(|| black_box(StandardRunner::new(&catalog, reference_config(7)).unwrap()));
    });
}

/// Benchmark: solve the reference grid to completion.
fn bench_solve_reference(c: &mut Criterion) {
    let catalog = reference_catalog();
    let unwrapped = catalog.unwrap().unwrap();
    c.bench_function("solve_16x16x4", |b| {
        b.iter(|| {
            let mut runner =
                StandardRunner::with_unwrapped(unwrapped.clone(), reference_config(7)).unwrap();
            black_box(runner.tick_n(100_000))
        });
    });
}

/// Benchmark: 100 ticks on the stress grid, measuring per-step cost
/// on a large domain.
fn bench_stress_100_ticks(c: &mut Criterion) {
    let catalog = reference_catalog();
    let unwrapped = catalog.unwrap().unwrap();
    let mut group = c.benchmark_group("stress");
    group.sample_size(20);
    group.bench_function("ticks_100_32x32x8", |b| {
        b.iter(|| {
            let mut runner =
                StandardRunner::with_unwrapped(unwrapped.clone(), stress_config(11)).unwrap();
            black_box(runner.tick_n(100))
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_runner_setup,
    bench_solve_reference,
    bench_stress_100_ticks
);
criterion_main!(benches);
