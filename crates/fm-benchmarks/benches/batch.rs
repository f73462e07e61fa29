//! Benchmarks for the Flexible Median indicator
//!
//! Compares the SIMD columnar path against the row-wise batch and the
//! streaming path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fm_core::{Bars, FlexibleMedian, Indicator, Ohlc};

fn sample(size: usize) -> Vec<Ohlc> {
    (0..size)
        .map(|i| {
            let p = 100.0 + (i % 23) as f64 * 0.5;
            Ohlc::new(p, p + 2.0, p - 2.0, p + 0.5)
        })
        .collect()
}

fn bench_compute_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("fm_compute_columns");
    let fm = FlexibleMedian::with_weights(2.0, 0.5).unwrap();

    for size in [10, 100, 1000, 10000].iter() {
        let bars: Bars = sample(*size).into_iter().collect();
        let mut outputs = vec![0.0; *size];

        group.bench_with_input(BenchmarkId::new("simd", size), size, |b, &_size| {
            b.iter(|| {
                let count = fm
                    .compute_columns(
                        black_box(bars.open()),
                        black_box(bars.high()),
                        black_box(bars.low()),
                        black_box(bars.close()),
                        black_box(&mut outputs),
                    )
                    .unwrap();
                black_box(count)
            })
        });
    }

    group.finish();
}

fn bench_compute_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("fm_compute");
    let fm = FlexibleMedian::with_weights(2.0, 0.5).unwrap();

    for size in [10, 100, 1000, 10000].iter() {
        let bars = sample(*size);
        let mut outputs = vec![0.0; *size];

        group.bench_with_input(BenchmarkId::new("scalar", size), size, |b, &_size| {
            b.iter(|| {
                let count = fm
                    .compute(black_box(&bars), black_box(&mut outputs))
                    .unwrap();
                black_box(count)
            })
        });
    }

    group.finish();
}

fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("fm_next");
    let bars = sample(10000);

    group.bench_function("streaming", |b| {
        b.iter(|| {
            let mut fm = FlexibleMedian::default();
            for bar in &bars {
                black_box(fm.next(*bar));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compute_columns, bench_compute_rows, bench_next);
criterion_main!(benches);
