//! Workflow state: the shared mutable record passed between nodes.
//!
//! One `WorkflowState` flows through a single `GraphRunner::run` call:
//! created fresh from the caller's input, handed to each node in turn, and
//! returned when the run finishes. Well-known fields (`initial_input`,
//! `history`, `next_node`, `final_answer`) are typed; everything else lives
//! in an open extension map keyed by string.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shared mutable record for one workflow run.
///
/// Nodes receive the state by value, mutate or rebuild it, and return it.
/// Edge routers read it by reference after each node runs. The extension map
/// holds workflow-specific fields shared by convention between nodes and
/// routers; no validation is performed on keys or values.
///
/// `history` is append-only and lists every node the runner executed, in
/// execution order, including the final node before termination.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkflowState {
    /// The value passed to `GraphRunner::run`, untouched by the engine.
    initial_input: Value,
    /// Names of nodes visited so far, in execution order.
    history: Vec<String>,
    /// Routing label written by a node's action, read by conditional edges.
    next_node: Option<String>,
    /// Conventional slot for the workflow's result; read by the caller.
    final_answer: Option<Value>,
    /// Open extension map for workflow-specific fields.
    extra: HashMap<String, Value>,
}

impl WorkflowState {
    /// Creates a fresh state seeded with the caller's input and an empty history.
    pub fn new(initial_input: impl Into<Value>) -> Self {
        Self {
            initial_input: initial_input.into(),
            ..Self::default()
        }
    }

    /// The value the run was started with.
    pub fn initial_input(&self) -> &Value {
        &self.initial_input
    }

    /// Nodes visited so far, in execution order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Records a visited node. Called by the runner before each node executes.
    pub(crate) fn push_history(&mut self, node_name: impl Into<String>) {
        self.history.push(node_name.into());
    }

    /// The routing label for conditional edges, if a node has set one.
    pub fn next_node(&self) -> Option<&str> {
        self.next_node.as_deref()
    }

    /// Sets the routing label read by conditional edges after this node runs.
    pub fn set_next_node(&mut self, label: impl Into<String>) {
        self.next_node = Some(label.into());
    }

    /// The workflow's result, if a node has produced one.
    pub fn final_answer(&self) -> Option<&Value> {
        self.final_answer.as_ref()
    }

    /// Sets the workflow's result.
    pub fn set_final_answer(&mut self, answer: impl Into<Value>) {
        self.final_answer = Some(answer.into());
    }

    /// Reads a workflow-specific field from the extension map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Writes a workflow-specific field into the extension map.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Removes a workflow-specific field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }
}
