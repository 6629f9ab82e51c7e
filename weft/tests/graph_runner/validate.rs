//! GraphRunner::validate: advisory topology checks through the public API.

use std::sync::Arc;

use weft::{GraphRunner, Passthrough, ValidationError, FINISH};

use crate::common::{answer_node, TriageNode};

/// **Scenario**: The triage topology validates cleanly, including a node that
/// is terminal by omission.
#[tokio::test]
async fn well_formed_triage_graph_validates() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(TriageNode))
        .add_node(answer_node("GetWeather", "sunny"))
        .add_node(answer_node("DoMath", "42"))
        .set_entry_point("Triage")
        .add_conditional_edge(
            "Triage",
            [
                ("WEATHER".to_string(), "GetWeather".to_string()),
                ("MATH".to_string(), "DoMath".to_string()),
            ]
            .into_iter()
            .collect(),
        )
        .add_edge("GetWeather", FINISH);

    assert!(runner.validate().is_ok());
    // Validation is advisory: the graph still runs afterwards.
    let state = runner.run("What's the weather?").await.unwrap();
    assert_eq!(state.history(), ["Triage", "GetWeather"]);
}

/// **Scenario**: A path map pointing at an unregistered node is reported
/// before any run.
#[test]
fn dangling_path_map_target_is_reported() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(TriageNode))
        .set_entry_point("Triage")
        .add_conditional_edge(
            "Triage",
            [("WEATHER".to_string(), "GetWeather".to_string())]
                .into_iter()
                .collect(),
        );

    match runner.validate() {
        Err(ValidationError::NodeNotFound(name)) => assert_eq!(name, "GetWeather"),
        other => panic!("expected NodeNotFound(GetWeather), got {:?}", other),
    }
}

/// **Scenario**: A node nothing routes to is reported as unreachable.
#[test]
fn stranded_node_is_reported() {
    let mut runner = GraphRunner::new();
    runner
        .add_node(Arc::new(Passthrough::new("a")))
        .add_node(Arc::new(Passthrough::new("stranded")))
        .set_entry_point("a")
        .add_edge("a", FINISH);

    match runner.validate() {
        Err(ValidationError::Unreachable(name)) => assert_eq!(name, "stranded"),
        other => panic!("expected Unreachable(stranded), got {:?}", other),
    }
}
