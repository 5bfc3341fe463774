/*!
 * Waiter Configuration
 *
 * Runtime configuration for condition polling
 */

use crate::core::limits::{
    DEFAULT_POLL_INTERVAL, MIN_POLL_INTERVAL, POLL_INTERVAL_ENV, RELAXED_POLL_INTERVAL,
    RESPONSIVE_POLL_INTERVAL,
};
use std::time::Duration;
use tracing::warn;

/// Signal waiter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterConfig {
    /// Sleep between predicate evaluations in `wait_for_condition`
    pub poll_interval: Duration,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaiterConfig {
    /// Configuration for coordinators that must react within a few ms
    pub const fn responsive() -> Self {
        Self {
            poll_interval: RESPONSIVE_POLL_INTERVAL,
        }
    }

    /// Configuration for slow, long-running groups
    pub const fn relaxed() -> Self {
        Self {
            poll_interval: RELAXED_POLL_INTERVAL,
        }
    }

    /// Build a configuration with an explicit poll interval
    ///
    /// Intervals below [`MIN_POLL_INTERVAL`] are raised to it.
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            poll_interval: poll_interval.max(MIN_POLL_INTERVAL),
        }
    }

    /// Load from the environment
    ///
    /// Environment variables:
    /// - GROUP_SYNC_POLL_INTERVAL_MS: poll interval in milliseconds (default: 100)
    pub fn from_env() -> Self {
        match std::env::var(POLL_INTERVAL_ENV) {
            Ok(raw) => Self::parse_poll_interval(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Ignoring invalid {}", POLL_INTERVAL_ENV);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn parse_poll_interval(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .map(|ms| Self::with_poll_interval(Duration::from_millis(ms)))
    }
}
