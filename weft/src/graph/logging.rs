//! Logging helpers for graph execution.
//!
//! Structured logging for run boundaries, node execution, and routing,
//! called from the `GraphRunner` run loop.

use crate::state::WorkflowState;

use super::runner::GraphError;

/// Log node execution start.
pub fn log_node_start(node_name: &str) {
    tracing::debug!(node = node_name, "Starting node execution");
}

/// Log the state a node is about to run with.
pub fn log_node_state(node_name: &str, state: &WorkflowState) {
    tracing::debug!(node = node_name, state = ?state, "Node execution: state");
}

/// Log node execution completion.
pub fn log_node_complete(node_name: &str) {
    tracing::debug!(node = node_name, "Node execution complete");
}

/// Log graph run start.
pub fn log_graph_start() {
    tracing::info!("Starting graph execution");
}

/// Log graph run completion.
pub fn log_graph_complete() {
    tracing::info!("Graph execution complete");
}

/// Log graph run error.
pub fn log_graph_error(error: &GraphError) {
    tracing::error!(?error, "Graph execution error");
}
