//! # Weft
//!
//! A minimal workflow graph engine in Rust. Compose asynchronous steps into a
//! graph with a simple **state-in, state-out** design: one shared
//! [`WorkflowState`] flows through nodes, with routing decided by edges after
//! each step.
//!
//! ## Design principles
//!
//! - **Single state type**: every node reads and writes the same
//!   [`WorkflowState`] — typed well-known fields plus an open extension map.
//! - **One step per node**: a [`Node`] receives state, does its work
//!   (including any internal fan-out), and returns the updated state.
//! - **Routing lives on edges**: a node records a decision in
//!   `state.next_node`; the edge registry decides where that decision routes,
//!   so the same node can be rewired without changing its logic.
//! - **Sequencing only**: no retries, timeouts, or persistence — errors abort
//!   the run and propagate unmodified; resilience belongs to the node actions
//!   or the calling layer.
//!
//! ## Main modules
//!
//! - [`graph`]: [`GraphRunner`], [`Node`], [`FnNode`], [`FINISH`],
//!   [`generate_dot`] — build and run workflow graphs.
//! - [`state`]: [`WorkflowState`] — the shared record for one run.
//! - [`error`]: [`NodeError`] — action failures.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use weft::{FnNode, GraphRunner, WorkflowState, FINISH};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), weft::GraphError> {
//! let mut runner = GraphRunner::new();
//! runner
//!     .add_node(Arc::new(FnNode::new("Greet", |mut state: WorkflowState| async move {
//!         state.set_final_answer("hello");
//!         Ok(state)
//!     })))
//!     .set_entry_point("Greet")
//!     .add_edge("Greet", FINISH);
//!
//! let state = runner.run("hi").await?;
//! assert_eq!(state.history(), ["Greet"]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod state;

pub use error::NodeError;
pub use graph::{
    generate_dot, generate_text, FnNode, GraphError, GraphRunner, Node, Passthrough, RouterFn,
    ValidationError, FINISH,
};
pub use state::WorkflowState;
