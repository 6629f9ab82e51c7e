//! Node execution error type.
//!
//! Returned by `Node::run` when a workflow step fails.

use thiserror::Error;

/// Node action error.
///
/// Returned by `Node::run` when a step fails. The engine performs no retry or
/// suppression; a failed step aborts the run and the error surfaces to the
/// caller through `GraphError`.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Execution failed with a message (e.g. external call failed, bad input).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
