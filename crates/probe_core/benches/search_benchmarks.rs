//! Criterion benchmarks for probe_core search algorithms.
//!
//! Measures wall-clock lookup cost of every algorithm on evenly spread,
//! quadratic, cubic and outlier-skewed data at several sequence sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probe_core::SearchAlgorithm;

const MAX_VALUE: f64 = 2000.0;

/// Generate `n` sorted values following `x^power` scaled to `MAX_VALUE`.
fn generate_curve(n: usize, power: i32) -> Vec<u64> {
    (0..n)
        .map(|i| {
            let x = i as f64 / (n - 1) as f64;
            (x.powi(power) * MAX_VALUE) as u64
        })
        .collect()
}

/// Linear data whose last value is a far outlier.
fn generate_outlier(n: usize) -> Vec<u64> {
    let mut values = generate_curve(n, 1);
    if let Some(last) = values.last_mut() {
        *last = (MAX_VALUE as u64) * 100;
    }
    values
}

/// Deterministic spread of keys over `[0, MAX_VALUE]`.
fn generate_keys(count: usize) -> Vec<u64> {
    (0..count as u64)
        .map(|i| (i * 7919) % (MAX_VALUE as u64 + 1))
        .collect()
}

/// Benchmark 100 lookups per algorithm for each data shape and size.
fn bench_search_algorithms(c: &mut Criterion) {
    let keys = generate_keys(100);

    let shapes: [(&str, fn(usize) -> Vec<u64>); 4] = [
        ("linear", |n| generate_curve(n, 1)),
        ("quadratic", |n| generate_curve(n, 2)),
        ("cubic", |n| generate_curve(n, 3)),
        ("outlier", generate_outlier),
    ];

    for (shape, make) in shapes {
        let mut group = c.benchmark_group(format!("search_{}", shape));

        for size in [100, 1000, 10000] {
            let values = make(size);

            for algorithm in SearchAlgorithm::ALL {
                if algorithm.is_oracle() && size > 1000 {
                    continue;
                }
                group.bench_with_input(
                    BenchmarkId::new(algorithm.id(), size),
                    &values,
                    |b, values| {
                        b.iter(|| {
                            for &key in &keys {
                                black_box(algorithm.search(black_box(values), black_box(key)));
                            }
                        });
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_search_algorithms);
criterion_main!(benches);
