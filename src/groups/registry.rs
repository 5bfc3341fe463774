/*!
 * Group Signal Registry
 * In-memory registry owning one signal per live thread group
 */

use super::context::GroupContext;
use super::traits::SignalRegistry;
use crate::core::errors::{GroupError, GroupResult};
use crate::core::sync::GroupSignal;
use crate::core::types::GroupId;
use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Registry mapping group ids to their shared signal
///
/// Cloning is cheap and clones share the same groups.
#[derive(Clone)]
pub struct GroupSignalRegistry {
    groups: Arc<DashMap<GroupId, Arc<GroupSignal>, RandomState>>,
}

impl GroupSignalRegistry {
    pub fn new() -> Self {
        info!("Group signal registry initialized");
        Self {
            groups: Arc::new(DashMap::with_hasher(RandomState::new())),
        }
    }

    /// Register a new group under a fresh id and return its worker context
    pub fn register(&self) -> GroupContext {
        // Fresh v4 ids do not collide in practice; retry keeps the invariant anyway
        loop {
            let group = GroupId::new();
            if self.register_group(group).is_ok() {
                return GroupContext::new(group);
            }
        }
    }

    /// Register `group` with a new unset signal
    pub fn register_group(&self, group: GroupId) -> GroupResult<Arc<GroupSignal>> {
        match self.groups.entry(group) {
            Entry::Occupied(_) => {
                warn!(group = %group, "Group already registered");
                Err(GroupError::AlreadyRegistered(group))
            }
            Entry::Vacant(slot) => {
                let signal = Arc::new(GroupSignal::new());
                slot.insert(signal.clone());
                info!(group = %group, "Registered thread group");
                Ok(signal)
            }
        }
    }

    /// Remove a group; waiters already holding its signal keep it alive
    pub fn unregister(&self, group: GroupId) -> bool {
        let removed = self.groups.remove(&group).is_some();
        if removed {
            info!(group = %group, "Unregistered thread group");
        }
        removed
    }

    /// Worker context for a registered group
    pub fn context(&self, group: GroupId) -> GroupResult<GroupContext> {
        if self.contains(group) {
            Ok(GroupContext::new(group))
        } else {
            Err(GroupError::GroupNotFound(group))
        }
    }

    /// Clear a group's signal so it can be reused for another round
    pub fn reset_signal(&self, group: GroupId) -> GroupResult<()> {
        let signal = self.get_signal(group)?;
        signal.clear();
        debug!(group = %group, "Reset group signal");
        Ok(())
    }

    #[inline]
    pub fn contains(&self, group: GroupId) -> bool {
        self.groups.contains_key(&group)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Ids of all registered groups (unordered snapshot)
    pub fn group_ids(&self) -> Vec<GroupId> {
        self.groups.iter().map(|entry| *entry.key()).collect()
    }
}

impl Default for GroupSignalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalRegistry for GroupSignalRegistry {
    fn get_signal(&self, group: GroupId) -> GroupResult<Arc<GroupSignal>> {
        self.groups
            .get(&group)
            .map(|entry| entry.value().clone())
            .ok_or(GroupError::GroupNotFound(group))
    }

    fn set_all_signals(&self) -> usize {
        let mut count = 0;
        for entry in self.groups.iter() {
            entry.value().set();
            count += 1;
        }
        warn!(groups = count, "Set signals of all thread groups");
        count
    }
}
