/*!
 * Signal Waiter
 *
 * Event-aware sleeping and condition polling bound to one thread group's
 * signal.
 *
 * # Design: One Type, Two Constructors
 *
 * Coordinators and workers behave identically once they hold the signal;
 * they only differ in how they find it. `for_group` resolves it from an
 * explicit group id, `for_context` from the worker context handed to the
 * worker's entry point. `unbound` holds no signal and degrades to plain
 * timed sleeps.
 */

use crate::core::errors::GroupResult;
use crate::core::limits::MIN_POLL_INTERVAL;
use crate::core::sync::{GroupSignal, WaiterConfig};
use crate::core::types::GroupId;
use crate::groups::{GroupContext, SignalRegistry};
use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How a waiter obtained its signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaiterRole {
    /// Coordinator, resolved from an explicit group id
    Parent,
    /// Worker, resolved from its group context
    Child,
    /// No signal configured
    Unbound,
}

/// Interruptible sleeper and condition poller for a thread group
///
/// Clones share the same signal and registry.
#[derive(Clone)]
pub struct SignalWaiter {
    signal: Option<Arc<GroupSignal>>,
    registry: Option<Arc<dyn SignalRegistry>>,
    config: WaiterConfig,
    role: WaiterRole,
}

impl SignalWaiter {
    /// Waiter for the coordinator of `group`
    ///
    /// Fails with `GroupNotFound` if the registry does not know the group.
    pub fn for_group(registry: Arc<dyn SignalRegistry>, group: GroupId) -> GroupResult<Self> {
        let signal = registry.get_signal(group)?;
        debug!(group = %group, "Parent waiter bound to group signal");
        Ok(Self {
            signal: Some(signal),
            registry: Some(registry),
            config: WaiterConfig::default(),
            role: WaiterRole::Parent,
        })
    }

    /// Waiter for a worker running inside `ctx`
    ///
    /// Fails with `NoGroupContext` for a detached context and with
    /// `GroupNotFound` if its group is no longer registered.
    pub fn for_context(
        registry: Arc<dyn SignalRegistry>,
        ctx: &GroupContext,
    ) -> GroupResult<Self> {
        let signal = registry.get_context_signal(ctx)?;
        debug!(group = ?ctx.group_id(), "Child waiter bound to group signal");
        Ok(Self {
            signal: Some(signal),
            registry: Some(registry),
            config: WaiterConfig::default(),
            role: WaiterRole::Child,
        })
    }

    /// Waiter without a signal: sleeps always run to completion
    pub fn unbound() -> Self {
        Self {
            signal: None,
            registry: None,
            config: WaiterConfig::default(),
            role: WaiterRole::Unbound,
        }
    }

    /// Replace the polling configuration
    pub fn with_config(mut self, config: WaiterConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn role(&self) -> WaiterRole {
        self.role
    }

    #[inline]
    pub fn config(&self) -> &WaiterConfig {
        &self.config
    }

    /// The shared group signal, if any
    #[inline]
    pub fn signal(&self) -> Option<&Arc<GroupSignal>> {
        self.signal.as_ref()
    }

    /// Whether the group signal is currently set (`false` when unbound)
    #[inline]
    pub fn is_signalled(&self) -> bool {
        self.signal.as_ref().is_some_and(|signal| signal.is_set())
    }

    /// Sleep for `duration` unless the group signal is set first
    ///
    /// Returns `true` if the full duration elapsed, `false` if the signal
    /// interrupted the sleep (or was already set). Unbound waiters always
    /// sleep the full duration.
    pub fn event_aware_sleep(&self, duration: Duration) -> bool {
        match &self.signal {
            None => {
                thread::sleep(duration);
                true
            }
            Some(signal) => !signal.wait(duration),
        }
    }

    /// Set the group signal, waking every thread waiting on it
    pub fn set_signal(&self) {
        match &self.signal {
            Some(signal) => signal.set(),
            None => debug!("set_signal on unbound waiter ignored"),
        }
    }

    /// Poll `predicate` with the configured interval until it holds or
    /// `timeout` elapses
    ///
    /// See [`wait_for_condition_every`](Self::wait_for_condition_every).
    pub fn wait_for_condition<F>(&self, predicate: F, timeout: Duration) -> bool
    where
        F: FnMut() -> bool,
    {
        self.wait_for_condition_every(predicate, timeout, self.config.poll_interval)
    }

    /// Poll `predicate` every `poll_interval` until it holds or `timeout`
    /// elapses
    ///
    /// On success the group signal is set, so every other waiter of the
    /// group observes completion, and `true` is returned. On timeout the
    /// signal is left untouched and `false` is returned.
    ///
    /// A set signal shortens the current interval but does not end the
    /// loop; the predicate and deadline stay authoritative. The predicate
    /// must be race-free on its own (build it from `SafeCounter` /
    /// `SafeQueue` reads).
    pub fn wait_for_condition_every<F>(
        &self,
        mut predicate: F,
        timeout: Duration,
        poll_interval: Duration,
    ) -> bool
    where
        F: FnMut() -> bool,
    {
        let poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
        let start = Instant::now();
        // While the signal stays set every wait returns at once
        let mut interrupted = false;

        while start.elapsed() < timeout {
            if predicate() {
                self.set_signal();
                debug!(
                    role = ?self.role,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Condition met"
                );
                return true;
            }

            let nap = poll_interval.min(timeout.saturating_sub(start.elapsed()));
            // Re-arm once the signal has been cleared
            interrupted &= self.is_signalled();
            if interrupted {
                thread::sleep(nap);
            } else if !self.event_aware_sleep(nap) {
                interrupted = true;
            }
        }

        debug!(
            role = ?self.role,
            timeout_ms = timeout.as_millis() as u64,
            "Condition wait timed out"
        );
        false
    }

    /// Set the signal of every registered group
    ///
    /// Emergency stop-all with cross-group blast radius; not part of a
    /// group's normal flow. Returns the number of groups signalled, `0`
    /// for an unbound waiter.
    pub fn set_all_signals(&self) -> usize {
        match &self.registry {
            Some(registry) => {
                warn!(role = ?self.role, "Broadcasting stop to all thread groups");
                registry.set_all_signals()
            }
            None => {
                warn!("set_all_signals on unbound waiter has no registry");
                0
            }
        }
    }
}

impl fmt::Debug for SignalWaiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalWaiter")
            .field("role", &self.role)
            .field("signal", &self.signal)
            .field("config", &self.config)
            .finish()
    }
}
