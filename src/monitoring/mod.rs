/*!
 * Monitoring
 * Structured tracing setup and thread group spans
 */

mod tracer;

pub use tracer::{init_tracing, GroupSpan, TRACE_JSON_ENV};
