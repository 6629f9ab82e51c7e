//! Example: sequential story pipeline.
//!
//! A linear chain of unconditional edges: outline -> draft -> review. Each
//! step reads the previous step's output from the extension map and writes
//! its own; the last node has no outgoing edge, so the run halts after it.
//!
//! Run: `cargo run -p weft-examples --example sequential -- "a robot learning to paint"`

use std::env;
use std::sync::Arc;

use weft::{FnNode, GraphRunner, WorkflowState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let topic = env::args()
        .nth(1)
        .unwrap_or_else(|| "a robot learning to paint".to_string());

    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(FnNode::new(
            "Outline",
            |mut state: WorkflowState| async move {
                let topic = state.initial_input().as_str().unwrap_or_default().to_string();
                state.set("outline", format!("1. Introduce {topic}. 2. Complication. 3. Resolution."));
                Ok(state)
            },
        )))
        .add_node(Arc::new(FnNode::new(
            "Draft",
            |mut state: WorkflowState| async move {
                let outline = state
                    .get("outline")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                state.set("draft", format!("Story following outline: {outline}"));
                Ok(state)
            },
        )))
        .add_node(Arc::new(FnNode::new(
            "Review",
            |mut state: WorkflowState| async move {
                let draft = state
                    .get("draft")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                state.set_final_answer(format!("{draft} [reviewed, approved]"));
                Ok(state)
            },
        )))
        .set_entry_point("Outline")
        .add_edge("Outline", "Draft")
        .add_edge("Draft", "Review");

    runner.validate().expect("valid graph");

    let state = runner.run(topic).await.expect("run failed");
    println!("history: {:?}", state.history());
    println!("answer:  {}", state.final_answer().unwrap_or(&"<none>".into()));
}
