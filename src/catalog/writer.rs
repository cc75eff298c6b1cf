//! Render generated levels back into catalog syntax.

use std::fmt::Write as _;

use crate::generator::{Generated, Template};
use crate::graph::Edge;

/// Render a generated level as a `.level` block ready to paste into a catalog.
///
/// With `explicit`, the graph is written out as `.nodes`/`.edges`; otherwise
/// the template directives are kept. Either way the derived start nodes and a
/// first edge leaving a legal start are declared.
pub fn write_level(
    id: u32,
    name: &str,
    template: &Template,
    generated: &Generated,
    explicit: bool,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_level_into(&mut out, id, name, template, generated, explicit);
    out
}

fn write_level_into(
    out: &mut String,
    id: u32,
    name: &str,
    template: &Template,
    generated: &Generated,
    explicit: bool,
) -> std::fmt::Result {
    writeln!(out, ".level {} \"{}\"", id, escape(name))?;

    if explicit {
        let nodes: Vec<String> = generated.graph.nodes().iter().map(ToString::to_string).collect();
        writeln!(out, ".nodes {}", nodes.join(" "))?;
        let edges: Vec<String> = generated
            .graph
            .edges()
            .iter()
            .map(|e| format!("({} {})", e.a(), e.b()))
            .collect();
        for chunk in edges.chunks(6) {
            writeln!(out, ".edges {}", chunk.join(" "))?;
        }
    } else {
        writeln!(out, ".cycle {}", template.node_count())?;
        for [x, y, z] in template.triplets() {
            writeln!(out, ".triplet {} {} {}", x, y, z)?;
        }
        if let Some((u, v)) = template.chord() {
            writeln!(out, ".chord {} {}", u, v)?;
        }
    }

    let starts: Vec<String> = generated.valid_starts.iter().map(ToString::to_string).collect();
    writeln!(out, ".starts {}", starts.join(" "))?;

    if let Some(edge) = first_edge(generated) {
        writeln!(out, ".first {} {}", edge.a(), edge.b())?;
    }

    Ok(())
}

/// The first edge, in graph order, that touches a legal start node.
fn first_edge(generated: &Generated) -> Option<Edge> {
    generated
        .graph
        .edges()
        .iter()
        .find(|edge| generated.valid_starts.iter().any(|&s| edge.contains(s)))
        .copied()
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
