/*!
 * Synchronization Primitives Benchmarks
 *
 * Lock round-trip cost of the counter and queue, and wake latency of a
 * parked signal waiter
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thread_group_sync::{GroupSignalRegistry, SafeCounter, SafeQueue, SignalWaiter};

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    let counter = SafeCounter::new();
    group.bench_function("increment", |b| b.iter(|| counter.increment(black_box(1))));

    let bounded = SafeCounter::new();
    group.bench_function("increment_if_less_than", |b| {
        b.iter(|| bounded.increment_if_less_than(black_box(i64::MAX)))
    });

    for threads in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("contended_increment", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let counter = Arc::new(SafeCounter::new());
                    let handles: Vec<_> = (0..threads)
                        .map(|_| {
                            let counter = counter.clone();
                            thread::spawn(move || {
                                for _ in 0..1000 {
                                    counter.increment(1);
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                    counter.value()
                });
            },
        );
    }

    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    let queue = SafeQueue::new();
    group.bench_function("append_pop", |b| {
        b.iter(|| {
            queue.append(black_box(42u64));
            queue.pop()
        })
    });

    for batch in [1, 16, 256] {
        group.bench_with_input(BenchmarkId::new("pop_batch", batch), &batch, |b, &batch| {
            let queue: SafeQueue<u64> = SafeQueue::with_capacity(batch);
            b.iter(|| {
                for i in 0..batch as u64 {
                    queue.append(i);
                }
                queue.pop_batch(batch)
            })
        });
    }

    group.finish();
}

fn bench_wake_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("wake_latency");

    group.bench_function("set_signal", |b| {
        b.iter(|| {
            let registry = Arc::new(GroupSignalRegistry::new());
            let ctx = registry.register();
            let child = SignalWaiter::for_context(registry.clone(), &ctx).unwrap();
            let parent = child.clone();

            let handle = thread::spawn(move || child.event_aware_sleep(Duration::from_secs(1)));

            // Immediate wake
            parent.set_signal();
            handle.join().unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_counter, bench_queue, bench_wake_latency);
criterion_main!(benches);
