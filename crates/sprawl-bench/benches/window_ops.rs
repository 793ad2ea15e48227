//! Criterion micro-benchmarks for neighbour counting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sprawl_bench::landscape;
use sprawl_core::Target;
use sprawl_space::{EdgeBehavior, MooreWindow};

/// Benchmark: urban neighbour totals for all 10K cells, clipped and wrapped.
fn bench_totals_10k(c: &mut Criterion) {
    let indicator = landscape(100, 100, 42).indicator(Target::Urban);
    let absorb = MooreWindow::new(EdgeBehavior::Absorb);
    let wrap = MooreWindow::new(EdgeBehavior::Wrap);

    c.bench_function("totals_absorb_10k", |b| {
        b.iter(|| black_box(absorb.totals(&indicator)));
    });
    c.bench_function("totals_wrap_10k", |b| {
        b.iter(|| black_box(wrap.totals(&indicator)));
    });
}

/// Benchmark: per-cell count() over the whole grid, for comparison with totals().
fn bench_count_10k(c: &mut Criterion) {
    let indicator = landscape(100, 100, 42).indicator(Target::SemiUrban);
    let window = MooreWindow::default();

    c.bench_function("count_per_cell_10k", |b| {
        b.iter(|| {
            for r in 0..100 {
                for col in 0..100 {
                    black_box(window.count(&indicator, r, col).unwrap());
                }
            }
        });
    });
}

criterion_group!(benches, bench_totals_10k, bench_count_10k);
criterion_main!(benches);
