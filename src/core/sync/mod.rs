/*!
 * Synchronization Primitives
 *
 * Building blocks shared between a thread group's coordinator and its
 * workers:
 * - `SafeCounter`: integer counter with atomic compare-and-increment
 * - `SafeQueue`: FIFO work queue where empty pops return `None`
 * - `GroupSignal`: settable flag that waiting threads park on
 *
 * Every primitive owns exactly one lock and every method is a single lock
 * round-trip. Compose multi-step operations at the call site only when
 * the intermediate states are harmless.
 */

mod config;
mod counter;
mod event;
mod queue;

pub use config::WaiterConfig;
pub use counter::SafeCounter;
pub use event::GroupSignal;
pub use queue::SafeQueue;
