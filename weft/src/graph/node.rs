//! Graph node trait: one step in a workflow.
//!
//! A node receives the [`WorkflowState`], does arbitrary asynchronous work
//! (call an external service, pure computation), and returns the updated
//! state. The runner makes no assumption about what a node does internally,
//! only that it terminates and returns a state.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::error::NodeError;
use crate::state::WorkflowState;

/// One step in a workflow graph: state in, state out.
///
/// `name` identifies the node in the runner's registry and in
/// `WorkflowState::history`; it must be unique within a graph. From the
/// runner's perspective a node execution is atomic: one node completes fully
/// (including all internal awaits) before the next starts.
///
/// Routing is not a node concern. A node that wants to steer a conditional
/// edge writes a label via `WorkflowState::set_next_node`; the edge registry
/// decides where that label routes.
#[async_trait]
pub trait Node: Send + Sync {
    /// Node name (e.g. `"Triage"`). Key for registry lookups and history entries.
    fn name(&self) -> &str;

    /// One step: receive state, return updated state.
    ///
    /// An `Err` aborts the run; the engine performs no retry and the error
    /// propagates unmodified to the caller of `GraphRunner::run`.
    async fn run(&self, state: WorkflowState) -> Result<WorkflowState, NodeError>;
}

type ActionFuture = Pin<Box<dyn Future<Output = Result<WorkflowState, NodeError>> + Send>>;
type ActionFn = Box<dyn Fn(WorkflowState) -> ActionFuture + Send + Sync>;

/// A node built from a name and an async closure or function.
///
/// Lets callers register plain `async fn(WorkflowState) -> Result<WorkflowState,
/// NodeError>` steps without defining a type per node:
///
/// ```rust
/// use weft::{FnNode, WorkflowState};
///
/// let node = FnNode::new("GetWeather", |mut state: WorkflowState| async move {
///     state.set_final_answer("sunny");
///     Ok(state)
/// });
/// ```
pub struct FnNode {
    name: String,
    action: ActionFn,
}

impl FnNode {
    /// Wraps an async closure as a named node.
    pub fn new<F, Fut>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(WorkflowState) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<WorkflowState, NodeError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(move |state| Box::pin(action(state))),
        }
    }
}

#[async_trait]
impl Node for FnNode {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, state: WorkflowState) -> Result<WorkflowState, NodeError> {
        (self.action)(state).await
    }
}

/// A node that does nothing except expose a name; state passes through unchanged.
///
/// Useful as a landmark or join point in a topology.
pub struct Passthrough {
    name: String,
}

impl Passthrough {
    /// Creates a passthrough node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Node for Passthrough {
    fn name(&self) -> &str {
        &self.name
    }

    /// Pass-through: returns the same state.
    async fn run(&self, state: WorkflowState) -> Result<WorkflowState, NodeError> {
        Ok(state)
    }
}
