/*!
 * Group Context
 *
 * Explicit group membership handed to a worker's entry point. A worker
 * builds its waiter from the context without knowing its group id.
 */

use crate::core::types::GroupId;
use serde::{Deserialize, Serialize};

/// Thread group membership of a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GroupContext {
    group: Option<GroupId>,
}

impl GroupContext {
    /// Context for a worker of `group`
    pub const fn new(group: GroupId) -> Self {
        Self { group: Some(group) }
    }

    /// Context for a thread outside any group
    pub const fn detached() -> Self {
        Self { group: None }
    }

    #[inline]
    pub const fn group_id(&self) -> Option<GroupId> {
        self.group
    }

    #[inline]
    pub const fn is_detached(&self) -> bool {
        self.group.is_none()
    }
}

impl From<GroupId> for GroupContext {
    fn from(group: GroupId) -> Self {
        Self::new(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_carries_group() {
        let id = GroupId::new();
        let ctx = GroupContext::from(id);
        assert_eq!(ctx.group_id(), Some(id));
        assert!(!ctx.is_detached());
    }

    #[test]
    fn test_default_context_is_detached() {
        let ctx = GroupContext::default();
        assert_eq!(ctx, GroupContext::detached());
        assert!(ctx.is_detached());
    }
}
