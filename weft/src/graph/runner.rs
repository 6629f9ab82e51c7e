//! Graph runner: node registry, edge registry, entry point, run loop.
//!
//! Build a [`GraphRunner`] with `add_node` / `set_entry_point` / `add_edge` /
//! `add_conditional_edge`, optionally `validate()`, then `run(initial_input)`.
//! The runner steps from the entry point, executing one node at a time and
//! applying the node's outgoing edge to pick the next, until the terminal
//! sentinel [`FINISH`] is produced or a node with no outgoing edge completes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::error::NodeError;
use crate::state::WorkflowState;

use super::edge::{Edge, RouterFn};
use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state,
};
use super::node::Node;
use super::validate::ValidationError;

/// Terminal sentinel: the reserved node name signaling workflow completion.
///
/// Routers return it to end the run. It must not collide with a real node
/// name; this is a configuration convention, not a validated constraint.
pub const FINISH: &str = "FINISH";

/// Error from `GraphRunner::run`.
///
/// The engine performs no recovery, retry, or suppression: every error aborts
/// the run immediately and propagates to the caller.
#[derive(Debug, Error)]
pub enum GraphError {
    /// `run` was invoked before `set_entry_point`.
    #[error("graph entry point not set")]
    EntryPointNotSet,

    /// The current node name (entry point or a router's output) is not in the
    /// node registry.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A node's action failed; the underlying error surfaces unmodified.
    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Workflow graph: nodes plus one outgoing edge per node, driven to completion.
///
/// Nodes are owned by the registry as `Arc<dyn Node>`; edges route by fixed
/// destination, by a `next_node` path map, or by an arbitrary router function.
/// Configuration methods return `&mut Self` for chaining. `run` may be called
/// repeatedly; each call is independent and produces a fresh
/// [`WorkflowState`].
#[derive(Default)]
pub struct GraphRunner {
    pub(super) nodes: HashMap<String, Arc<dyn Node>>,
    /// At most one outgoing edge per source node; re-registration replaces.
    pub(super) edges: HashMap<String, Edge>,
    pub(super) entry_point: Option<String>,
}

impl GraphRunner {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, keyed by `node.name()`. Replaces any node with the same name.
    pub fn add_node(&mut self, node: Arc<dyn Node>) -> &mut Self {
        self.nodes.insert(node.name().to_string(), node);
        self
    }

    /// Sets the node the run starts at. Required before `run`.
    pub fn set_entry_point(&mut self, node_name: impl Into<String>) -> &mut Self {
        self.entry_point = Some(node_name.into());
        self
    }

    /// Adds an unconditional edge: after `from` runs, always go to `to`.
    ///
    /// Replaces any edge previously registered for `from`.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.insert(from.into(), Edge::Unconditional(to.into()));
        self
    }

    /// Adds a conditional edge: after `from` runs, `state.next_node` is looked
    /// up in `path_map` to pick the destination.
    ///
    /// A label absent from the map (or an unset `next_node`) routes to
    /// [`FINISH`]. Replaces any edge previously registered for `from`.
    pub fn add_conditional_edge(
        &mut self,
        from: impl Into<String>,
        path_map: HashMap<String, String>,
    ) -> &mut Self {
        self.edges.insert(from.into(), Edge::Conditional(path_map));
        self
    }

    /// Adds a router edge: after `from` runs, `router` picks the next node
    /// name from the post-execution state.
    ///
    /// The general form of [`add_conditional_edge`](Self::add_conditional_edge).
    /// The router must return a registered node name or [`FINISH`]. Replaces
    /// any edge previously registered for `from`.
    pub fn add_router(&mut self, from: impl Into<String>, router: RouterFn) -> &mut Self {
        self.edges.insert(from.into(), Edge::Router(router));
        self
    }

    /// Checks the configured topology: entry point set and registered, edge
    /// sources and destinations registered (or [`FINISH`]), conditional
    /// path-map targets registered, and every node reachable from the entry
    /// point.
    ///
    /// Advisory pass; `run` performs its own lookups regardless. Router
    /// edges are opaque: their targets cannot be checked statically, and
    /// reachability is not traced past them. A node with no outgoing edge is
    /// not an error (terminal-by-no-edge is a supported topology).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let entry = self
            .entry_point
            .as_deref()
            .ok_or(ValidationError::EntryPointNotSet)?;
        if !self.nodes.contains_key(entry) {
            return Err(ValidationError::NodeNotFound(entry.to_string()));
        }

        for (from, edge) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(ValidationError::NodeNotFound(from.clone()));
            }
            match edge {
                Edge::Unconditional(to) => {
                    if to != FINISH && !self.nodes.contains_key(to) {
                        return Err(ValidationError::NodeNotFound(to.clone()));
                    }
                }
                Edge::Conditional(path_map) => {
                    for target in path_map.values() {
                        if target != FINISH && !self.nodes.contains_key(target) {
                            return Err(ValidationError::NodeNotFound(target.clone()));
                        }
                    }
                }
                Edge::Router(_) => {}
            }
        }

        // Reachability walk over statically known targets.
        let mut visited = HashSet::new();
        let mut stack = vec![entry.to_string()];
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            match self.edges.get(&current) {
                Some(Edge::Unconditional(to)) if to != FINISH => stack.push(to.clone()),
                Some(Edge::Conditional(path_map)) => {
                    stack.extend(path_map.values().filter(|t| *t != FINISH).cloned());
                }
                _ => {}
            }
        }
        let mut stranded: Vec<&String> = self
            .nodes
            .keys()
            .filter(|name| !visited.contains(*name))
            .collect();
        stranded.sort();
        if let Some(name) = stranded.first() {
            return Err(ValidationError::Unreachable((*name).clone()));
        }

        Ok(())
    }

    /// Runs the graph from the entry point until a terminal condition.
    ///
    /// A fresh [`WorkflowState`] is seeded with `initial_input`. Each step
    /// appends the current node's name to `state.history`, executes the
    /// node's action (replacing the running state with its return value), and
    /// applies the node's outgoing edge to pick the next node. The loop ends
    /// when the edge produces [`FINISH`] or the just-executed node has no
    /// registered edge; the final state is returned.
    ///
    /// Node executions are strictly sequential within one run; a node's body
    /// may fan out internally, but the runner never starts the next node
    /// before the previous action has fully resolved. The engine provides no
    /// timeout: if an action hangs, `run` never returns.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EntryPointNotSet`] if no entry point was configured.
    /// - [`GraphError::NodeNotFound`] if the current node name is not registered.
    /// - [`GraphError::Node`] propagating a failed action unmodified; state
    ///   mutations made before the failure are dropped with the run.
    pub async fn run(&self, initial_input: impl Into<Value>) -> Result<WorkflowState, GraphError> {
        let entry = self
            .entry_point
            .clone()
            .ok_or(GraphError::EntryPointNotSet)?;

        let mut state = WorkflowState::new(initial_input);
        let mut current = entry;

        log_graph_start();
        while current != FINISH {
            let node = match self.nodes.get(&current) {
                Some(node) => Arc::clone(node),
                None => {
                    let err = GraphError::NodeNotFound(current);
                    log_graph_error(&err);
                    return Err(err);
                }
            };

            state.push_history(current.as_str());
            log_node_start(&current);
            log_node_state(&current, &state);

            state = match node.run(state).await {
                Ok(state) => state,
                Err(e) => {
                    let err = GraphError::Node(e);
                    log_graph_error(&err);
                    return Err(err);
                }
            };
            log_node_complete(&current);

            match self.edges.get(&current) {
                None => {
                    tracing::debug!(node = %current, "no outgoing edge, treating node as terminal");
                    break;
                }
                Some(edge) => {
                    let next = edge.resolve_next(&state);
                    tracing::debug!(from = %current, to = %next, "routing");
                    current = next;
                }
            }
        }
        log_graph_complete();

        Ok(state)
    }
}
