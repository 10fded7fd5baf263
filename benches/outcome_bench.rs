//! Benchmark for Outcome combinators.
//!
//! Compares Outcome methods against the equivalent `Result` code to evaluate
//! the overhead (if any) of the algebra.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twofold::{Outcome, Transpose};

// =============================================================================
// Mapping Benchmarks
// =============================================================================

fn benchmark_bimap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_bimap");

    group.bench_function("outcome_bimap_success", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i32, String> = Outcome::success(black_box(42));
            black_box(outcome.bimap(|value| value * 2, |error| error.len()))
        });
    });

    group.bench_function("result_map_success", |bencher| {
        bencher.iter(|| {
            let result: Result<i32, String> = Ok(black_box(42));
            black_box(result.map(|value| value * 2).map_err(|error| error.len()))
        });
    });

    group.bench_function("outcome_bimap_failure", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i32, String> = Outcome::failure("error".to_string());
            black_box(outcome.bimap(|value| value * 2, |error| error.len()))
        });
    });

    group.finish();
}

fn benchmark_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_flat_map_chain");

    let step = |value: i32| -> Outcome<i32, &'static str> {
        if value < 1_000_000 { Outcome::success(value + 1) } else { Outcome::failure("overflow") }
    };

    group.bench_function("outcome_flat_map_x10", |bencher| {
        bencher.iter(|| {
            let mut outcome = Outcome::success(black_box(0));
            for _ in 0..10 {
                outcome = outcome.flat_map(step);
            }
            black_box(outcome)
        });
    });

    group.bench_function("result_and_then_x10", |bencher| {
        bencher.iter(|| {
            let mut result: Result<i32, &'static str> = Ok(black_box(0));
            for _ in 0..10 {
                result = result.and_then(|value| step(value).into_result());
            }
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Transpose Benchmarks
// =============================================================================

fn benchmark_transpose_list(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_transpose_list");

    let outcomes: Vec<Outcome<i32, String>> = (0..1_000).map(Outcome::success).collect();

    group.bench_function("transpose", |bencher| {
        bencher.iter(|| black_box(outcomes.clone().transpose()));
    });

    group.bench_function("result_collect", |bencher| {
        bencher.iter(|| {
            let collected: Result<Vec<i32>, String> =
                outcomes.clone().into_iter().map(Outcome::into_result).collect();
            black_box(collected)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_bimap,
    benchmark_flat_map_chain,
    benchmark_transpose_list,
);

criterion_main!(benches);
