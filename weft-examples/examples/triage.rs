//! Example: conditional triage workflow.
//!
//! A Triage node classifies the input and writes a routing label into
//! `state.next_node`; a conditional edge maps the label to a handler node.
//! Unknown labels fall back to FINISH.
//!
//! Run: `cargo run -p weft-examples --example triage -- "What's the weather?"`

use std::env;
use std::sync::Arc;

use weft::{generate_text, FnNode, GraphRunner, WorkflowState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| "What's the weather?".to_string());

    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(FnNode::new(
            "Triage",
            |mut state: WorkflowState| async move {
                let input = state
                    .initial_input()
                    .as_str()
                    .unwrap_or_default()
                    .to_lowercase();
                if input.contains("weather") {
                    state.set_next_node("WEATHER");
                } else if input.chars().any(|c| c.is_ascii_digit()) {
                    state.set_next_node("MATH");
                } else {
                    state.set_next_node("GENERAL");
                }
                Ok(state)
            },
        )))
        .add_node(Arc::new(FnNode::new(
            "GetWeather",
            |mut state: WorkflowState| async move {
                state.set_final_answer("sunny");
                Ok(state)
            },
        )))
        .add_node(Arc::new(FnNode::new(
            "DoMath",
            |mut state: WorkflowState| async move {
                state.set_final_answer("42");
                Ok(state)
            },
        )))
        .add_node(Arc::new(FnNode::new(
            "GeneralResponse",
            |mut state: WorkflowState| async move {
                state.set_final_answer("I can only help with math or weather questions right now.");
                Ok(state)
            },
        )))
        .set_entry_point("Triage")
        .add_conditional_edge(
            "Triage",
            [
                ("WEATHER".to_string(), "GetWeather".to_string()),
                ("MATH".to_string(), "DoMath".to_string()),
                ("GENERAL".to_string(), "GeneralResponse".to_string()),
            ]
            .into_iter()
            .collect(),
        );

    runner.validate().expect("valid graph");
    println!("{}", generate_text(&runner));

    let state = runner.run(input).await.expect("run failed");
    println!("history: {:?}", state.history());
    println!("answer:  {}", state.final_answer().unwrap_or(&"<none>".into()));
}
