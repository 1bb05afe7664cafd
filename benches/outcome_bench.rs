//! Benchmark for container combinators.
//!
//! Compares `Maybe`/`Outcome` combinators against hand-written matches on
//! the standard library types to check that the wrappers add no overhead.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use outcomes::maybe::Maybe;
use outcomes::outcome::{self, Outcome};
use std::hint::black_box;

// =============================================================================
// Combinator Benchmarks
// =============================================================================

fn benchmark_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_chain");

    group.bench_function("maybe_map_filter", |bencher| {
        bencher.iter(|| {
            let value = Maybe::Some(black_box(21));
            black_box(value.map(|x| x * 2).filter(|x| *x > 10).unwrap_or(0))
        });
    });

    group.bench_function("option_map_filter", |bencher| {
        bencher.iter(|| {
            let value = Some(black_box(21));
            black_box(value.map(|x| x * 2).filter(|x| *x > 10).unwrap_or(0))
        });
    });

    group.bench_function("outcome_map_map_err", |bencher| {
        bencher.iter(|| {
            let value: Outcome<i32, String> = Outcome::Ok(black_box(21));
            black_box(value.map(|x| x * 2).map_err(|e| e.len()))
        });
    });

    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn benchmark_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("all");

    for size in [10, 100, 1000] {
        let successes: Vec<Outcome<i32, i32>> = (0..size).map(Outcome::Ok).collect();
        let mixed: Vec<Outcome<i32, i32>> = (0..size)
            .map(|n| if n % 3 == 0 { Outcome::Err(n) } else { Outcome::Ok(n) })
            .collect();

        group.bench_with_input(BenchmarkId::new("all_ok", size), &successes, |bencher, input| {
            bencher.iter(|| black_box(outcome::all(input.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("all_mixed", size), &mixed, |bencher, input| {
            bencher.iter(|| black_box(outcome::all(input.iter().copied())));
        });

        group.bench_with_input(
            BenchmarkId::new("std_collect_fail_fast", size),
            &mixed,
            |bencher, input| {
                bencher.iter(|| {
                    black_box(
                        input
                            .iter()
                            .map(|value| value.into_result())
                            .collect::<Result<Vec<i32>, i32>>(),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_map_chain, benchmark_all);
criterion_main!(benches);
