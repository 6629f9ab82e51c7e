//! Graph validation error.
//!
//! Returned by `GraphRunner::validate` when the configured topology references
//! unknown nodes or leaves registered nodes unreachable. Validation is an
//! advisory build-time pass; `run` performs its own lookups regardless.

use thiserror::Error;

/// Error from `GraphRunner::validate` (dangling route, unreachable node).
///
/// A node with no outgoing edge is not an error: terminal-by-no-edge is a
/// supported topology. Router-function edges are opaque to validation; their
/// targets are only checked at run time.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// No entry point was configured.
    #[error("graph entry point not set")]
    EntryPointNotSet,

    /// The entry point, an edge destination, or a conditional path-map target
    /// names a node that was never registered (and is not the sentinel).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A registered node cannot be reached from the entry point.
    #[error("node unreachable from entry point: {0}")]
    Unreachable(String),
}
