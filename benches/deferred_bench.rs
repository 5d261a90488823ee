//! Benchmark for Deferred: settlement, continuation dispatch and executors.

use carrier::deferred::{Deferred, Inline, ThreadPerTask};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Settlement Benchmarks
// =============================================================================

fn benchmark_settlement(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deferred_settlement");

    group.bench_function("lift_and_wait", |bencher| {
        bencher.iter(|| black_box(Deferred::lift(black_box(42)).wait()));
    });

    group.bench_function("pending_settle_wait", |bencher| {
        bencher.iter(|| {
            let (settler, deferred) = Deferred::pending();
            settler.settle(black_box(42));
            black_box(deferred.wait())
        });
    });

    group.bench_function("settled_try_get", |bencher| {
        let deferred = Deferred::lift(vec![1_u8; 64]);
        bencher.iter(|| black_box(deferred.try_get()));
    });

    group.finish();
}

// =============================================================================
// Chain Benchmarks
// =============================================================================

fn benchmark_chain_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deferred_chain_depth");

    for depth in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("inline_settled", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| {
                    let mut value = Deferred::spawn(&Inline, || 0_u64);
                    for _ in 0..depth {
                        value = value.map(|n| n + 1);
                    }
                    black_box(value.wait())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("registered_then_settled", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| {
                    let (settler, source) = Deferred::pending();
                    let mut value = source;
                    for _ in 0..depth {
                        value = value.map(|n: u64| n + 1);
                    }
                    settler.settle(0);
                    black_box(value.wait())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_thread_per_task(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deferred_thread_per_task");
    group.sample_size(20);

    group.bench_function("two_stage_chain", |bencher| {
        bencher.iter(|| {
            let chained = Deferred::spawn(&ThreadPerTask, || black_box(20))
                .bind(|x| Deferred::spawn(&ThreadPerTask, move || x + 1));
            black_box(chained.wait())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_settlement,
    benchmark_chain_depth,
    benchmark_thread_per_task
);
criterion_main!(benches);
