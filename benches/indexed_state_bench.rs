//! Benchmark for indexed state computations.
//!
//! Measures construction and execution cost of the primitive constructors
//! and of the composition operators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use indexed_state::effect::{IndexedState, State, get, modify, pure, put};
use std::hint::black_box;

// =============================================================================
// Primitive Benchmarks
// =============================================================================

fn benchmark_indexed_state_run(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_state_run");

    group.bench_function("new", |bencher| {
        bencher.iter(|| {
            let state: IndexedState<i32, i64, i32> =
                IndexedState::new(|s: i32| (s * 2, i64::from(s) + 1));
            black_box(state.run(black_box(10)))
        });
    });

    group.bench_function("get", |bencher| {
        bencher.iter(|| black_box(get::<i32>().run(black_box(42))));
    });

    group.bench_function("put", |bencher| {
        bencher.iter(|| {
            let state: IndexedState<i32, u64, ()> = put(black_box(100));
            black_box(state.run(0))
        });
    });

    group.bench_function("pure", |bencher| {
        bencher.iter(|| {
            let state: State<i32, i32> = pure(black_box(42));
            black_box(state.run(0))
        });
    });

    group.finish();
}

// =============================================================================
// Composition Benchmarks
// =============================================================================

fn benchmark_indexed_state_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_state_chain");

    group.bench_function("type_changing_chain", |bencher| {
        bencher.iter(|| {
            let state = modify(|count: i32| count + 1)
                .then(modify(|count: i32| i64::from(count) * 3))
                .then(modify(|count: i64| count.to_string()))
                .then(get::<String>());
            black_box(state.run(black_box(0)))
        });
    });

    group.bench_function("flat_map_chain", |bencher| {
        bencher.iter(|| {
            let state: IndexedState<i32, String, i32> = get::<i32>()
                .flat_map(|current| put(current + 1).then(pure(current)))
                .flat_map(|old| get::<i32>().imap(|n: i32| n.to_string()).fmap(move |new| old + new));
            black_box(state.run(black_box(10)))
        });
    });

    group.bench_function("ap", |bencher| {
        bencher.iter(|| {
            let function = pure(|x: i32| x + 1);
            let argument = modify(|n: i32| n * 2).then(get());
            black_box(argument.ap(function).run(black_box(3)))
        });
    });

    group.finish();
}

fn benchmark_indexed_state_prebuilt(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_state_prebuilt");

    for depth in [10, 100, 1000] {
        let mut chain: State<u64, ()> = pure(());
        for _ in 0..depth {
            chain = chain.then(modify(|count: u64| count + 1));
        }
        let chain = chain.then(get::<u64>());

        group.bench_with_input(BenchmarkId::new("modify_depth", depth), &chain, |bencher, chain| {
            bencher.iter(|| black_box(chain.run(black_box(0))));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_indexed_state_run,
    benchmark_indexed_state_chain,
    benchmark_indexed_state_prebuilt
);

criterion_main!(benches);
