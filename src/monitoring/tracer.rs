/*!
 * Structured Tracing
 * Subscriber setup and per-group spans using the tracing crate
 *
 * Features:
 * - Env-filtered, human-readable or JSON output
 * - Thread ids and names on every event (workers are named per group)
 * - One span per thread group run, correlated by group id
 */

use crate::core::types::GroupId;
use std::time::{Duration, Instant};
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable enabling JSON output
pub const TRACE_JSON_ENV: &str = "GROUP_SYNC_TRACE_JSON";

/// Group runs longer than this are reported as slow
const SLOW_GROUP_THRESHOLD: Duration = Duration::from_secs(5);

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - GROUP_SYNC_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span covering one thread group's run from spawn to join
pub struct GroupSpan {
    span: tracing::Span,
    start: Instant,
    group: GroupId,
}

impl GroupSpan {
    pub fn new(group: GroupId, workers: usize) -> Self {
        let span = span!(
            Level::INFO,
            "thread_group",
            group = %group,
            workers = workers,
            items_processed = tracing::field::Empty,
            result = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let entered = span.enter();
        debug!(group = %group, workers, "thread group started");
        drop(entered);

        Self {
            span,
            start: Instant::now(),
            group,
        }
    }

    #[inline]
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// Record how many work items the group completed
    pub fn record_items_processed(&self, count: usize) {
        self.span.record("items_processed", count);
    }

    /// Record whether the group finished or was cut short
    pub fn record_result(&self, completed: bool) {
        self.span
            .record("result", if completed { "completed" } else { "cancelled" });
    }

    /// Enter the span on the current thread
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Handle for entering the span from worker threads
    pub fn span(&self) -> &tracing::Span {
        &self.span
    }
}

impl Drop for GroupSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_ms", duration.as_millis() as u64);

        if duration > SLOW_GROUP_THRESHOLD {
            warn!(
                group = %self.group,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow thread group"
            );
        } else {
            debug!(
                group = %self.group,
                duration_ms = duration.as_millis() as u64,
                "thread group finished"
            );
        }
    }
}
