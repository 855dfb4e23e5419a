//! Criterion benchmarks for the per-step stencil work.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ripple_bench::{reference_profile, stress_profile};
use ripple_core::StepId;
use ripple_engine::StencilEngine;
use ripple_grid::total_variation;

/// Benchmark: 100 steps on the reference 64-cell grid.
fn bench_advance_reference(c: &mut Criterion) {
    c.bench_function("advance_reference_100_steps", |b| {
        b.iter(|| {
            let mut engine = StencilEngine::new(reference_profile(42)).unwrap();
            for step in 0..100 {
                engine.advance(StepId(step)).unwrap();
            }
            black_box(engine.height().total());
        });
    });
}

/// Benchmark: a single step on the 512-cell stress grid.
fn bench_advance_stress_single(c: &mut Criterion) {
    let mut engine = StencilEngine::new(stress_profile(42)).unwrap();
    let mut step = 0u64;

    c.bench_function("advance_stress_single_step", |b| {
        b.iter(|| {
            engine.advance(StepId(step)).unwrap();
            step += 1;
            black_box(engine.height()[(1, 1)]);
        });
    });
}

/// Benchmark: total-variation diagnostic over the reference grid.
fn bench_total_variation(c: &mut Criterion) {
    let mut engine = StencilEngine::new(reference_profile(42)).unwrap();
    for step in 0..10 {
        engine.advance(StepId(step)).unwrap();
    }

    c.bench_function("total_variation_66x66", |b| {
        b.iter(|| black_box(total_variation(engine.height())));
    });
}

criterion_group!(
    benches,
    bench_advance_reference,
    bench_advance_stress_single,
    bench_total_variation
);
criterion_main!(benches);
