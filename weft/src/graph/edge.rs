//! Edges: how the runner picks the next node after one finishes.
//!
//! Each source node has at most one outgoing edge. An edge is either a fixed
//! destination, a conditional path map keyed by `state.next_node`, or an
//! arbitrary router function. Re-registering an edge for the same source
//! replaces the previous one.
//!
//! **Interaction**: stored in `GraphRunner`'s edge registry and resolved in
//! the run loop after each node executes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::state::WorkflowState;

use super::runner::FINISH;

/// Router function: reads the post-execution state, returns the next node name
/// (or [`FINISH`](super::FINISH)).
///
/// The returned name must be a registered node or the terminal sentinel;
/// anything else surfaces as `GraphError::NodeNotFound` on the next loop
/// iteration.
pub type RouterFn = Arc<dyn Fn(&WorkflowState) -> String + Send + Sync>;

/// Outgoing edge of a source node.
///
/// The conditional flavor decouples "what the node decided" (the `next_node`
/// label written by the node's own action) from "where that decision routes"
/// (the path map), so one node's output vocabulary can be remapped to
/// different topologies without changing the node.
pub(crate) enum Edge {
    /// Fixed destination; state is ignored.
    Unconditional(String),
    /// Looks up `state.next_node` in the map; absent label (or unset
    /// `next_node`) routes to the terminal sentinel.
    Conditional(HashMap<String, String>),
    /// Caller-supplied router function; opaque to validation.
    Router(RouterFn),
}

impl Edge {
    /// Resolves the next node name from the post-execution state.
    pub(crate) fn resolve_next(&self, state: &WorkflowState) -> String {
        match self {
            Edge::Unconditional(to) => to.clone(),
            Edge::Conditional(path_map) => {
                let label = state.next_node().unwrap_or(FINISH);
                path_map
                    .get(label)
                    .cloned()
                    .unwrap_or_else(|| FINISH.to_string())
            }
            Edge::Router(router) => router(state),
        }
    }
}
