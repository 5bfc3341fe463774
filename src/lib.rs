/*!
 * Thread Group Sync Library
 * Event-aware synchronization primitives for coordinator/worker thread groups
 */

pub mod core;
pub mod groups;
pub mod monitoring;
pub mod waiter;

// Re-exports
pub use crate::core::errors::{GroupError, GroupResult};
pub use crate::core::sync::{GroupSignal, SafeCounter, SafeQueue, WaiterConfig};
pub use crate::core::types::GroupId;
pub use groups::{GroupContext, GroupSignalRegistry, SignalRegistry};
pub use monitoring::{init_tracing, GroupSpan};
pub use waiter::{SignalWaiter, WaiterRole};
