/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 *
 * Only precondition violations are errors here. Empty queues and timed-out
 * waits are ordinary return values (`None` / `false`).
 */

use super::types::GroupId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Thread group lookup errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum GroupError {
    #[error("Thread group {0} not found")]
    #[diagnostic(
        code(group::not_found),
        help("The group may have been unregistered or never existed. Check the group id.")
    )]
    GroupNotFound(GroupId),

    #[error("Calling context does not belong to a thread group")]
    #[diagnostic(
        code(group::no_context),
        help("Build the worker context from the registry before spawning the worker.")
    )]
    NoGroupContext,

    #[error("Thread group {0} is already registered")]
    #[diagnostic(
        code(group::already_registered),
        help("Each group owns exactly one signal. Unregister it first or use a fresh id.")
    )]
    AlreadyRegistered(GroupId),
}

/// Result type for group lookups
pub type GroupResult<T> = Result<T, GroupError>;
