//! Property tests for SafeCounter and SafeQueue under concurrent access.

use proptest::prelude::*;
use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;
use thread_group_sync::{SafeCounter, SafeQueue};

// ============================================================================
// Arbitrary Generators
// ============================================================================

#[derive(Debug, Clone)]
enum QueueOp {
    Append(u32),
    Pop,
    PopAt(usize),
    Clear,
}

fn arb_queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        4 => any::<u32>().prop_map(QueueOp::Append),
        3 => Just(QueueOp::Pop),
        1 => (0usize..8).prop_map(QueueOp::PopAt),
        1 => Just(QueueOp::Clear),
    ]
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(config())]

    /// Concurrent increments never lose an update
    #[test]
    fn concurrent_increments_sum(deltas in prop::collection::vec(-1000i64..1000, 1..12)) {
        let counter = Arc::new(SafeCounter::new());
        let expected: i64 = deltas.iter().sum();

        let handles: Vec<_> = deltas
            .into_iter()
            .map(|delta| {
                let counter = counter.clone();
                thread::spawn(move || counter.increment(delta))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        prop_assert_eq!(counter.value(), expected);
    }

    /// Concurrent bounded increments succeed exactly min(N, M) times
    #[test]
    fn bounded_increments_cap(threads in 1i64..24, max in 0i64..24) {
        let counter = Arc::new(SafeCounter::new());

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || counter.increment_if_less_than(max))
            })
            .collect();

        let successes = handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .filter(|&ok| ok)
            .count() as i64;

        prop_assert_eq!(successes, threads.min(max));
        prop_assert_eq!(counter.value(), threads.min(max));
    }

    /// Single-threaded op sequences behave like a VecDeque, empty pops included
    #[test]
    fn queue_matches_model(ops in prop::collection::vec(arb_queue_op(), 0..64)) {
        let queue = SafeQueue::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Append(v) => {
                    queue.append(v);
                    model.push_back(v);
                }
                QueueOp::Pop => prop_assert_eq!(queue.pop(), model.pop_front()),
                QueueOp::PopAt(i) => prop_assert_eq!(queue.pop_at(i), model.remove(i)),
                QueueOp::Clear => {
                    queue.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(queue.len(), model.len());
        }
    }
}
