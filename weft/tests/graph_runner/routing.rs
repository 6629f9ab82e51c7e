//! Edge routing: unconditional, conditional path maps, router functions.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use weft::{FnNode, GraphRunner, Passthrough, RouterFn, WorkflowState, FINISH};

use crate::common::{answer_node, TriageNode};

fn label_node(name: &str, label: &'static str) -> Arc<FnNode> {
    Arc::new(FnNode::new(name, move |mut state: WorkflowState| async move {
        state.set_next_node(label);
        Ok(state)
    }))
}

fn path_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// **Scenario**: A label present in the path map routes to the mapped node.
#[tokio::test]
async fn conditional_routes_mapped_label() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(label_node("decide", "X"))
        .add_node(Arc::new(Passthrough::new("NodeB")))
        .add_node(Arc::new(Passthrough::new("NodeC")))
        .set_entry_point("decide")
        .add_conditional_edge("decide", path_map(&[("X", "NodeB"), ("Y", "NodeC")]));

    let state = runner.run("input").await.unwrap();
    assert_eq!(state.history(), ["decide", "NodeB"]);
}

/// **Scenario**: A label absent from the path map routes to the sentinel; the
/// run ends after the deciding node.
#[tokio::test]
async fn conditional_unknown_label_finishes() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(label_node("decide", "Z"))
        .add_node(Arc::new(Passthrough::new("NodeB")))
        .set_entry_point("decide")
        .add_conditional_edge("decide", path_map(&[("X", "NodeB")]));

    let state = runner.run("input").await.unwrap();
    assert_eq!(state.history(), ["decide"]);
}

/// **Scenario**: A node that never sets `next_node` routes to the sentinel.
#[tokio::test]
async fn conditional_unset_label_finishes() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(Passthrough::new("silent")))
        .add_node(Arc::new(Passthrough::new("NodeB")))
        .set_entry_point("silent")
        .add_conditional_edge("silent", path_map(&[("X", "NodeB")]));

    let state = runner.run("input").await.unwrap();
    assert_eq!(state.history(), ["silent"]);
}

/// **Scenario**: add_edge registered twice for the same source keeps only the
/// most recent destination (last-write-wins).
#[tokio::test]
async fn re_registered_edge_last_write_wins() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(Passthrough::new("a")))
        .add_node(Arc::new(Passthrough::new("b")))
        .add_node(Arc::new(Passthrough::new("c")))
        .set_entry_point("a")
        .add_edge("a", "b")
        .add_edge("a", "c");

    let state = runner.run("input").await.unwrap();
    assert_eq!(state.history(), ["a", "c"]);
}

/// **Scenario**: A router function picks the next node from the post-execution
/// state; returning FINISH ends the run.
#[tokio::test]
async fn router_function_routes_by_state() {
    let router: RouterFn = Arc::new(|state: &WorkflowState| {
        if state.get("loop_again").is_some() {
            "work".to_string()
        } else {
            FINISH.to_string()
        }
    });

    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(FnNode::new("work", |mut state: WorkflowState| async move {
            // Loop once: set the flag on the first pass, clear it on the second.
            if state.remove("loop_again").is_none() && state.history().len() == 1 {
                state.set("loop_again", true);
            }
            Ok(state)
        })))
        .set_entry_point("work")
        .add_router("work", router);

    let state = runner.run("input").await.unwrap();
    assert_eq!(state.history(), ["work", "work"]);
}

/// **Scenario**: The triage workflow from the tutorial: "What's the weather?"
/// routes to GetWeather, "2+2?" routes to DoMath, each writing its answer.
#[tokio::test]
async fn triage_workflow_routes_weather_and_math() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(TriageNode))
        .add_node(answer_node("GetWeather", "sunny"))
        .add_node(answer_node("DoMath", "42"))
        .set_entry_point("Triage")
        .add_conditional_edge(
            "Triage",
            path_map(&[("WEATHER", "GetWeather"), ("MATH", "DoMath")]),
        );

    let state = runner.run("What's the weather?").await.unwrap();
    assert_eq!(state.history(), ["Triage", "GetWeather"]);
    assert_eq!(state.final_answer(), Some(&json!("sunny")));

    let state = runner.run("2+2?").await.unwrap();
    assert_eq!(state.history(), ["Triage", "DoMath"]);
    assert_eq!(state.final_answer(), Some(&json!("42")));
}
