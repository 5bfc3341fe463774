/*!
 * Limits and Constants
 *
 * Centralized location for timing defaults and demo sizing.
 */

use std::time::Duration;

// =============================================================================
// WAIT / POLL TIMING
// =============================================================================

/// Default interval between predicate checks in `wait_for_condition` (100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Poll interval for coordinators that need quick reaction (10ms)
pub const RESPONSIVE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Poll interval for long-running, low-priority coordinators (1s)
pub const RELAXED_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Lower bound for configured poll intervals (1ms)
/// Anything smaller degenerates into busy polling
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Environment variable overriding the poll interval, in milliseconds
pub const POLL_INTERVAL_ENV: &str = "GROUP_SYNC_POLL_INTERVAL_MS";

// =============================================================================
// DEMO SIZING
// =============================================================================

/// Worker threads spawned per group by the demo binary
pub const DEMO_WORKERS_PER_GROUP: usize = 4;

/// Work items queued per group by the demo binary
pub const DEMO_ITEMS_PER_GROUP: usize = 32;

/// Maximum time the demo coordinator waits for its workers
pub const DEMO_COMPLETION_TIMEOUT: Duration = Duration::from_secs(10);
