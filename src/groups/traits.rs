/*!
 * Signal Registry Traits
 *
 * Contract between signal waiters and whatever owns the thread groups.
 */

use super::context::GroupContext;
use crate::core::errors::{GroupError, GroupResult};
use crate::core::sync::GroupSignal;
use crate::core::types::GroupId;
use std::sync::Arc;

/// Lookup and broadcast over per-group signals
///
/// Implementations must be:
/// - **Thread-safe**: lookups and broadcasts happen from any thread
/// - **Identity-preserving**: every lookup for a group returns the same
///   `Arc<GroupSignal>`, never a copy
pub trait SignalRegistry: Send + Sync {
    /// Signal of a registered group
    ///
    /// Fails with [`GroupError::GroupNotFound`] for unknown ids.
    fn get_signal(&self, group: GroupId) -> GroupResult<Arc<GroupSignal>>;

    /// Signal of the group a worker context belongs to
    ///
    /// Fails with [`GroupError::NoGroupContext`] if the context is detached.
    fn get_context_signal(&self, ctx: &GroupContext) -> GroupResult<Arc<GroupSignal>> {
        let group = ctx.group_id().ok_or(GroupError::NoGroupContext)?;
        self.get_signal(group)
    }

    /// Set the signal of every registered group
    ///
    /// Emergency stop-all: crosses group boundaries. Returns the number of
    /// signals set.
    fn set_all_signals(&self) -> usize;
}
