//! Criterion benchmarks for the per-thread generator facade.
//!
//! Measures single-draw latency through the thread-local facade against
//! closure-scoped batched access, to characterise the cost of the
//! `thread_local!` lookup relative to the draw itself.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use misc_random::{fill_bytes, next_double, next_int, next_int_below, with_generator};

/// Benchmark single draws through the free-function facade.
fn bench_facade_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");

    group.bench_function("next_int", |b| b.iter(|| black_box(next_int())));
    group.bench_function("next_double", |b| b.iter(|| black_box(next_double())));
    group.bench_function("next_int_below_100", |b| {
        b.iter(|| black_box(next_int_below(black_box(100)).unwrap()));
    });

    group.finish();
}

/// Benchmark batched draws under one `with_generator` borrow.
fn bench_batched_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("batched");

    for batch in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("next_int", batch), &batch, |b, &batch| {
            b.iter(|| {
                with_generator(|g| {
                    let mut acc = 0i64;
                    for _ in 0..batch {
                        acc = acc.wrapping_add(g.next_int() as i64);
                    }
                    black_box(acc)
                })
            });
        });
    }

    group.finish();
}

/// Benchmark byte-buffer fills at several sizes.
fn bench_fill_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_bytes");

    for size in [64usize, 1024, 65536] {
        let mut buffer = vec![0u8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| fill_bytes(black_box(buffer.as_mut_slice())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_facade_draws,
    bench_batched_draws,
    bench_fill_bytes
);
criterion_main!(benches);
