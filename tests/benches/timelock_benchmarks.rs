//! # Timelock-Ledger Benchmarks
//!
//! ```bash
//! cargo bench --package tl-tests --bench timelock_benchmarks
//! cargo bench --package tl-tests --bench timelock_benchmarks -- registry
//! ```
//!
//! | Group | What is measured |
//! |-------|------------------|
//! | registry | schedule / lookup on a bare registry |
//! | controller | request, execute, full cycle through the service |
//! | contention | requests from several threads at once |

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use shared_types::entities::{OperationId, OperationKind, U256};
use tl_01_operation_registry::OperationRegistry;
use tl_02_timelock_ledger::TimelockLedgerApi;
use tl_tests::fixtures::{owner, TestNode, MIN_DELAY};

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for size in [1_000u64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("schedule", size), &size, |b, &size| {
            b.iter(|| {
                let mut registry = OperationRegistry::new(MIN_DELAY);
                for i in 0..size {
                    registry
                        .schedule(OperationId(i), OperationKind::Issue, U256::one(), MIN_DELAY, 0)
                        .unwrap();
                }
                black_box(registry.len())
            });
        });
    }

    let mut registry = OperationRegistry::new(MIN_DELAY);
    for i in 0..100_000u64 {
        registry
            .schedule(OperationId(i), OperationKind::Redeem, U256::one(), MIN_DELAY, i)
            .unwrap();
    }
    let mut rng = rand::thread_rng();
    group.throughput(Throughput::Elements(1));
    group.bench_function("is_ready_100k", |b| {
        b.iter(|| {
            let id = OperationId(rng.gen_range(0..100_000));
            black_box(registry.is_ready(id, black_box(MIN_DELAY * 2)))
        });
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    group.throughput(Throughput::Elements(1));

    let node = TestNode::new();
    group.bench_function("request_issue", |b| {
        b.iter(|| node.service.request_issue(owner(), black_box(U256::one())))
    });

    group.bench_function("full_cycle", |b| {
        let node = TestNode::new();
        let mut now = 0;
        b.iter(|| {
            node.clock.set(now);
            let id = node.service.request_issue(owner(), U256::from(10)).unwrap();
            now += MIN_DELAY;
            node.clock.set(now);
            node.service.execute_request(owner(), id).unwrap();
            let id = node.service.request_redeem(owner(), U256::from(10)).unwrap();
            now += MIN_DELAY;
            node.clock.set(now);
            node.service.execute_request(owner(), id).unwrap();
        });
    });

    group.bench_function("rejected_early_execute", |b| {
        let node = TestNode::new();
        let id = node.service.request_issue(owner(), U256::one()).unwrap();
        b.iter(|| black_box(node.service.execute_request(owner(), id).is_err()))
    });

    group.finish();
}

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");
    const PER_THREAD: u64 = 1_000;

    for threads in [1u64, 4, 8] {
        group.throughput(Throughput::Elements(threads * PER_THREAD));
        group.bench_with_input(
            BenchmarkId::new("parallel_requests", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let node = TestNode::new();
                    let handles: Vec<_> = (0..threads)
                        .map(|_| {
                            let service = Arc::clone(&node.service);
                            thread::spawn(move || {
                                for _ in 0..PER_THREAD {
                                    service.request_issue(owner(), U256::one()).unwrap();
                                }
                            })
                        })
                        .collect();
                    for h in handles {
                        h.join().unwrap();
                    }
                    black_box(node.service.next_nonce())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    name = timelock_benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = bench_registry, bench_controller, bench_contention,
);

criterion_main!(timelock_benches);
