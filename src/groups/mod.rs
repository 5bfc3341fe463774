/*!
 * Thread Groups
 * Group identity, worker contexts and the per-group signal registry
 */

mod context;
mod registry;
pub mod traits;

// Re-export public API
pub use context::GroupContext;
pub use registry::GroupSignalRegistry;
pub use traits::SignalRegistry;
