//! Graph visualization utilities.
//!
//! Export a [`GraphRunner`]'s topology to Graphviz DOT or a plain text
//! outline for debugging. Router-function edges are opaque and rendered as a
//! `<router>` edge with no destination.

use std::fmt::Write;

use super::edge::Edge;
use super::runner::{GraphRunner, FINISH};

/// Generate a Graphviz DOT representation of the graph.
///
/// Conditional edges render one labeled arrow per path-map entry; an opaque
/// router renders a dashed arrow to a `<router>` placeholder.
pub fn generate_dot(runner: &GraphRunner) -> String {
    let mut dot = String::from("digraph {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box];\n\n");

    dot.push_str(&format!(
        "  \"{}\" [label=\"FINISH\", style=bold, fillcolor=lightcoral];\n",
        FINISH
    ));
    let mut names: Vec<&String> = runner.nodes.keys().collect();
    names.sort();
    for name in &names {
        if runner.entry_point.as_deref() == Some(name.as_str()) {
            dot.push_str(&format!(
                "  \"{}\" [style=bold, fillcolor=lightgreen];\n",
                name
            ));
        } else {
            dot.push_str(&format!("  \"{}\";\n", name));
        }
    }
    dot.push('\n');

    for from in &names {
        match runner.edges.get(*from) {
            Some(Edge::Unconditional(to)) => {
                dot.push_str(&format!("  \"{}\" -> \"{}\";\n", from, to));
            }
            Some(Edge::Conditional(path_map)) => {
                let mut entries: Vec<(&String, &String)> = path_map.iter().collect();
                entries.sort();
                for (label, to) in entries {
                    dot.push_str(&format!(
                        "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                        from, to, label
                    ));
                }
            }
            Some(Edge::Router(_)) => {
                dot.push_str(&format!(
                    "  \"{}\" -> \"<router>\" [style=dashed];\n",
                    from
                ));
            }
            None => {}
        }
    }

    dot.push_str("}\n");
    dot
}

/// Generate a plain text outline of the graph.
pub fn generate_text(runner: &GraphRunner) -> String {
    let mut out = String::new();
    match runner.entry_point.as_deref() {
        Some(entry) => {
            let _ = writeln!(out, "entry point: {}", entry);
        }
        None => {
            let _ = writeln!(out, "entry point: <not set>");
        }
    }
    let mut names: Vec<&String> = runner.nodes.keys().collect();
    names.sort();
    for name in names {
        match runner.edges.get(name) {
            Some(Edge::Unconditional(to)) => {
                let _ = writeln!(out, "{} -> {}", name, to);
            }
            Some(Edge::Conditional(path_map)) => {
                let mut entries: Vec<(&String, &String)> = path_map.iter().collect();
                entries.sort();
                for (label, to) in entries {
                    let _ = writeln!(out, "{} -[{}]-> {}", name, label, to);
                }
            }
            Some(Edge::Router(_)) => {
                let _ = writeln!(out, "{} -> <router>", name);
            }
            None => {
                let _ = writeln!(out, "{} (terminal, no outgoing edge)", name);
            }
        }
    }
    out
}
