/*!
 * Safe Counter
 *
 * Shared integer counter guarded by a single mutex. Every operation holds
 * the lock for its full duration, so no caller ever observes a partially
 * applied update.
 *
 * `increment_if_less_than` is the only compound compare-and-increment.
 * Building it from `value()` + `increment()` would reintroduce the race.
 */

use parking_lot::Mutex;
use std::fmt;

/// Thread-safe integer counter
pub struct SafeCounter {
    value: Mutex<i64>,
}

impl SafeCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self {
            value: Mutex::new(0),
        }
    }

    /// Add `by` (any sign) and return the updated value
    ///
    /// Saturates at `i64::MAX` / `i64::MIN` instead of overflowing, in every
    /// build profile.
    #[inline]
    pub fn increment(&self, by: i64) -> i64 {
        let mut value = self.value.lock();
        *value = value.saturating_add(by);
        *value
    }

    /// Increment by one if the current value is below `max`
    ///
    /// Returns `true` if the increment happened. The check and the write
    /// happen under the same lock acquisition.
    #[inline]
    pub fn increment_if_less_than(&self, max: i64) -> bool {
        let mut value = self.value.lock();
        if *value < max {
            *value += 1;
            true
        } else {
            false
        }
    }

    /// Compare the current value with `other`
    #[inline]
    pub fn equals(&self, other: i64) -> bool {
        *self.value.lock() == other
    }

    /// Snapshot of the current value
    #[inline]
    pub fn value(&self) -> i64 {
        *self.value.lock()
    }
}

impl Default for SafeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SafeCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeCounter")
            .field("value", &self.value())
            .finish()
    }
}
