/*!
 * Signal Waiters
 *
 * Cooperative cancellation for thread groups. Workers sleep through
 * `event_aware_sleep` so a coordinator (or an emergency broadcast) can cut
 * the sleep short; coordinators block in `wait_for_condition` until their
 * workers are done.
 */

mod waiter;

pub use waiter::{SignalWaiter, WaiterRole};
