//! Workflow graph: nodes, edges, and the runner that drives them.
//!
//! Register nodes and edges on a [`GraphRunner`], set the entry point, then
//! `run` with an input to drive the workflow to completion.

mod edge;
mod logging;
mod node;
mod runner;
mod validate;
mod visualization;

pub use edge::RouterFn;
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state,
};
pub use node::{FnNode, Node, Passthrough};
pub use runner::{GraphError, GraphRunner, FINISH};
pub use validate::ValidationError;
pub use visualization::{generate_dot, generate_text};
