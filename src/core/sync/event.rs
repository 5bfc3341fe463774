/*!
 * Group Signal
 *
 * Binary settable/waitable flag backed by `parking_lot::Condvar`.
 *
 * # Design: Flag Under the Condvar Mutex
 *
 * The flag lives inside the mutex the condvar waits on, so a `set()` can
 * never slip between a waiter's check and its park. Waiters re-check the
 * flag against a fixed deadline, which absorbs spurious wakeups without
 * stretching the total wait.
 *
 * Waiting threads are parked by the OS; nothing here spins.
 */

use parking_lot::{Condvar, Mutex};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Shared cancellation/completion signal for one thread group
#[repr(C, align(64))] // Cache-line aligned to prevent false sharing
pub struct GroupSignal {
    condvar: Condvar,
    state: Mutex<bool>,
    waiters: AtomicUsize,
}

impl GroupSignal {
    /// Create an unset signal
    pub fn new() -> Self {
        Self {
            condvar: Condvar::new(),
            state: Mutex::new(false),
            waiters: AtomicUsize::new(0),
        }
    }

    /// Set the signal and wake every waiting thread
    ///
    /// Idempotent: setting an already set signal wakes nobody new.
    pub fn set(&self) {
        let mut state = self.state.lock();
        *state = true;
        self.condvar.notify_all();
    }

    /// Whether the signal is currently set
    #[inline]
    pub fn is_set(&self) -> bool {
        *self.state.lock()
    }

    /// Reset the signal to unset
    pub fn clear(&self) {
        *self.state.lock() = false;
    }

    /// Block until the signal is set or `timeout` elapses
    ///
    /// Returns `true` if the signal is set, `false` on timeout. Returns
    /// immediately when the signal is already set.
    pub fn wait(&self, timeout: Duration) -> bool {
        let mut state = self.state.lock();
        if *state {
            return true;
        }

        self.waiters.fetch_add(1, Ordering::Relaxed);

        // Overflowing deadline means "longer than we can represent"
        match Instant::now().checked_add(timeout) {
            Some(deadline) => {
                while !*state {
                    if self.condvar.wait_until(&mut state, deadline).timed_out() {
                        break;
                    }
                }
            }
            None => {
                while !*state {
                    self.condvar.wait(&mut state);
                }
            }
        }

        self.waiters.fetch_sub(1, Ordering::Relaxed);
        *state
    }

    /// Approximate number of threads blocked in `wait` (for diagnostics)
    #[inline]
    pub fn waiter_count(&self) -> usize {
        self.waiters.load(Ordering::Relaxed)
    }
}

impl Default for GroupSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GroupSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupSignal")
            .field("set", &self.is_set())
            .field("waiters", &self.waiter_count())
            .finish()
    }
}
