/*!
 * Thread Group Demo - Main Entry Point
 *
 * Runs a few coordinator/worker thread groups over shared work queues:
 * - Workers drain their group's queue with event-aware sleeps
 * - Coordinators wait until every item is counted, which signals the group
 * - A coordinator that times out broadcasts stop to every group
 */

use std::error::Error;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

use thread_group_sync::core::limits::{
    DEMO_COMPLETION_TIMEOUT, DEMO_ITEMS_PER_GROUP, DEMO_WORKERS_PER_GROUP,
};
use thread_group_sync::{
    init_tracing, GroupContext, GroupSignalRegistry, GroupSpan, SafeCounter, SafeQueue,
    SignalWaiter, WaiterConfig,
};

const GROUPS: usize = 3;
const IDLE_BACKOFF: Duration = Duration::from_millis(10);
const WORK_DURATION: Duration = Duration::from_millis(5);

/// Work shared by one group's coordinator and workers
struct GroupWork {
    queue: SafeQueue<u64>,
    done: SafeCounter,
}

fn run_worker(
    registry: Arc<GroupSignalRegistry>,
    ctx: GroupContext,
    work: Arc<GroupWork>,
) -> Result<usize, Box<dyn Error + Send + Sync>> {
    let waiter = SignalWaiter::for_context(registry, &ctx)?;
    let mut processed = 0;

    while !waiter.is_signalled() {
        match work.queue.pop() {
            Some(_item) => {
                // Simulated work; a stop signal abandons the item
                if !waiter.event_aware_sleep(WORK_DURATION) {
                    break;
                }
                work.done.increment(1);
                processed += 1;
            }
            None => {
                if !waiter.event_aware_sleep(IDLE_BACKOFF) {
                    break;
                }
            }
        }
    }

    Ok(processed)
}

fn run_group(
    registry: Arc<GroupSignalRegistry>,
    config: WaiterConfig,
) -> Result<bool, Box<dyn Error>> {
    let ctx = registry.register();
    let group = ctx.group_id().ok_or("registered context has no group")?;
    let span = GroupSpan::new(group, DEMO_WORKERS_PER_GROUP);

    let queue = SafeQueue::with_capacity(DEMO_ITEMS_PER_GROUP);
    for item in 0..DEMO_ITEMS_PER_GROUP as u64 {
        queue.append(item);
    }
    let work = Arc::new(GroupWork {
        queue,
        done: SafeCounter::new(),
    });

    let mut handles = Vec::with_capacity(DEMO_WORKERS_PER_GROUP);
    for index in 0..DEMO_WORKERS_PER_GROUP {
        let registry = registry.clone();
        let work = work.clone();
        let worker_span = span.span().clone();
        let handle = thread::Builder::new()
            .name(format!("group-{}-worker-{}", &group.to_string()[..8], index))
            .spawn(move || {
                let _entered = worker_span.enter();
                run_worker(registry, ctx, work)
            })?;
        handles.push(handle);
    }

    let coordinator = SignalWaiter::for_group(registry.clone(), group)?.with_config(config);
    let target = DEMO_ITEMS_PER_GROUP as i64;
    let completed = {
        let _entered = span.enter();
        let completed =
            coordinator.wait_for_condition(|| work.done.equals(target), DEMO_COMPLETION_TIMEOUT);

        if !completed {
            warn!(
                group = %group,
                done = work.done.value(),
                "Group timed out, stopping all groups"
            );
            coordinator.set_all_signals();
        }
        completed
    };

    let mut processed = 0;
    for handle in handles {
        match handle.join() {
            Ok(Ok(count)) => processed += count,
            Ok(Err(e)) => warn!(group = %group, error = %e, "Worker failed"),
            Err(_) => warn!(group = %group, "Worker panicked"),
        }
    }

    span.record_items_processed(processed);
    span.record_result(completed);
    registry.unregister(group);

    info!(group = %group, processed, completed, "Thread group finished");
    Ok(completed)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured tracing
    init_tracing();

    let config = WaiterConfig::from_env();
    info!(
        poll_interval_ms = config.poll_interval.as_millis() as u64,
        "Thread group demo starting"
    );

    let registry = Arc::new(GroupSignalRegistry::new());

    let coordinators: Vec<_> = (0..GROUPS)
        .map(|index| {
            let registry = registry.clone();
            thread::Builder::new()
                .name(format!("coordinator-{}", index))
                .spawn(move || run_group(registry, config).map_err(|e| e.to_string()))
        })
        .collect::<Result<_, _>>()?;

    let mut completed = 0;
    for handle in coordinators {
        match handle.join() {
            Ok(Ok(true)) => completed += 1,
            Ok(Ok(false)) => {}
            Ok(Err(e)) => warn!(error = %e, "Coordinator failed"),
            Err(_) => warn!("Coordinator panicked"),
        }
    }

    info!(completed, total = GROUPS, "Thread group demo finished");
    Ok(())
}
