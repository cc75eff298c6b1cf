//! Legal start nodes and hint checking.

use std::collections::BTreeSet;

use serde::Serialize;

use super::issue::Issue;
use super::types::{Classification, Edge, NodeId};
use super::validate::Validation;
use super::Graph;

/// One progressively revealed hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintStep {
    /// Text shown to the player
    pub text: String,
    /// Highlight the legal start nodes
    pub show_valid_starts: bool,
    /// Highlight the first edge to draw
    pub show_first_edge: bool,
}

impl HintStep {
    /// A text-only step.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_valid_starts: false,
            show_first_edge: false,
        }
    }

    /// A step that reveals both overlays.
    pub fn reveal_all(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_valid_starts: true,
            show_first_edge: true,
        }
    }
}

/// Hints declared alongside a level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// Declared legal start nodes
    pub valid_starts: Vec<NodeId>,
    /// Declared first edge to draw
    pub first_edge: Option<Edge>,
    /// Hint steps, in reveal order
    pub steps: Vec<HintStep>,
}

/// Derive the legal start nodes from a classification.
///
/// Every node of a circuit is a legal start; a path must start at one of its
/// two odd-degree nodes. Returns `None` for invalid graphs.
pub fn derive_hint(
    classification: Classification,
    odd_nodes: &[NodeId],
    nodes: &BTreeSet<NodeId>,
) -> Option<Vec<NodeId>> {
    match classification {
        Classification::Circuit => Some(nodes.iter().copied().collect()),
        Classification::Path => Some(odd_nodes.to_vec()),
        Classification::Invalid => None,
    }
}

/// Check that a declared first edge is one of the graph's edges.
///
/// Unlike the start-node checks this holds for any graph, playable or not.
pub fn check_first_edge(graph: &Graph, hint: &Hint) -> Option<Issue> {
    hint.first_edge
        .filter(|edge| !graph.contains_edge(edge))
        .map(|edge| Issue::FirstEdgeMissing { edge })
}

/// Compare a declared hint against what the graph actually allows.
///
/// On a graph with no Eulerian walk only the first edge's presence is
/// checked, after a [`Issue::HintOnInvalidGraph`].
pub fn check_hint(graph: &Graph, validation: &Validation, hint: &Hint) -> Vec<Issue> {
    let mut issues = Vec::new();
    let missing = check_first_edge(graph, hint);

    let Some(derived) = derive_hint(
        validation.classification,
        &validation.odd_nodes,
        graph.nodes(),
    ) else {
        issues.push(Issue::HintOnInvalidGraph);
        issues.extend(missing);
        return issues;
    };

    let declared: BTreeSet<NodeId> = hint.valid_starts.iter().copied().collect();
    let derived_set: BTreeSet<NodeId> = derived.iter().copied().collect();
    if declared != derived_set {
        issues.push(Issue::StartNodesMismatch {
            declared: declared.into_iter().collect(),
            derived,
        });
    }

    if let Some(issue) = missing {
        issues.push(issue);
    } else if let Some(edge) = hint.first_edge {
        if !derived_set.iter().any(|&node| edge.contains(node)) {
            issues.push(Issue::FirstEdgeNotAtStart { edge });
        }
    }

    issues
}

/// Check that hint steps reveal progressively.
///
/// An empty list is accepted; a declared list needs at least two steps, a
/// text-only first step, and a last step showing both overlays. Once shown,
/// an overlay stays shown. Steps are numbered from 1 in diagnostics.
pub fn check_hint_steps(steps: &[HintStep]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
        return issues;
    };

    if steps.len() < 2 {
        issues.push(Issue::TooFewHintSteps { count: steps.len() });
    }
    if first.show_valid_starts || first.show_first_edge {
        issues.push(Issue::FirstStepRevealsOverlay);
    }
    if !(last.show_valid_starts && last.show_first_edge) {
        issues.push(Issue::LastStepHidesOverlay);
    }
    for (idx, pair) in steps.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        if (prev.show_valid_starts && !curr.show_valid_starts)
            || (prev.show_first_edge && !curr.show_first_edge)
        {
            issues.push(Issue::OverlayWithdrawn { step: idx + 2 });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::validate;

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    fn square() -> Graph {
        Graph::from_pairs(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
    }

    fn path_graph() -> Graph {
        // Square plus one diagonal: 0 and 2 become odd.
        Graph::from_pairs(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap()
    }

    #[test]
    fn test_circuit_starts_anywhere() {
        let graph = square();
        let validation = validate(&graph);
        let starts = derive_hint(validation.classification, &validation.odd_nodes, graph.nodes());
        assert_eq!(starts, Some(ids(&[0, 1, 2, 3])));
    }

    #[test]
    fn test_path_starts_at_odd_nodes() {
        let graph = path_graph();
        let validation = validate(&graph);
        let starts = derive_hint(validation.classification, &validation.odd_nodes, graph.nodes());
        assert_eq!(starts, Some(validation.odd_nodes.clone()));
        assert_eq!(starts, Some(ids(&[0, 2])));
    }

    #[test]
    fn test_invalid_has_no_starts() {
        let graph = Graph::from_pairs(&[0, 1, 2], &[(0, 1)]).unwrap();
        let validation = validate(&graph);
        assert_eq!(
            derive_hint(validation.classification, &validation.odd_nodes, graph.nodes()),
            None
        );
        let issues = check_hint(&graph, &validation, &Hint::default());
        assert_eq!(issues, vec![Issue::HintOnInvalidGraph]);
    }

    #[test]
    fn test_missing_first_edge_reported_on_invalid_graph() {
        let graph = Graph::from_pairs(&[0, 1, 2], &[(0, 1), (1, 2), (2, 0), (0, 1)]).unwrap();
        let validation = validate(&graph);
        assert_eq!(validation.classification, Classification::Invalid);

        let bogus = Edge::between(7, 8).unwrap();
        let hint = Hint {
            first_edge: Some(bogus),
            ..Hint::default()
        };
        assert_eq!(
            check_hint(&graph, &validation, &hint),
            vec![
                Issue::HintOnInvalidGraph,
                Issue::FirstEdgeMissing { edge: bogus },
            ]
        );
        assert_eq!(
            check_first_edge(&graph, &hint),
            Some(Issue::FirstEdgeMissing { edge: bogus })
        );

        let present = Hint {
            first_edge: Some(Edge::between(2, 1).unwrap()),
            ..Hint::default()
        };
        assert_eq!(check_first_edge(&graph, &present), None);
    }

    #[test]
    fn test_matching_hint_passes() {
        let graph = path_graph();
        let validation = validate(&graph);
        let hint = Hint {
            valid_starts: ids(&[2, 0]),
            first_edge: Some(Edge::between(1, 0).unwrap()),
            steps: Vec::new(),
        };
        assert!(check_hint(&graph, &validation, &hint).is_empty());
    }

    #[test]
    fn test_mismatched_starts_reported() {
        let graph = path_graph();
        let validation = validate(&graph);
        let hint = Hint {
            valid_starts: ids(&[1, 3]),
            ..Hint::default()
        };
        assert_eq!(
            check_hint(&graph, &validation, &hint),
            vec![Issue::StartNodesMismatch {
                declared: ids(&[1, 3]),
                derived: ids(&[0, 2]),
            }]
        );
    }

    #[test]
    fn test_first_edge_checks() {
        let graph = path_graph();
        let validation = validate(&graph);

        let missing = Hint {
            valid_starts: ids(&[0, 2]),
            first_edge: Some(Edge::between(1, 3).unwrap()),
            steps: Vec::new(),
        };
        assert_eq!(
            check_hint(&graph, &validation, &missing),
            vec![Issue::FirstEdgeMissing {
                edge: Edge::between(1, 3).unwrap()
            }]
        );

        let graph = Graph::from_pairs(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let validation = validate(&graph);
        let off_start = Hint {
            valid_starts: ids(&[0, 4]),
            first_edge: Some(Edge::between(1, 2).unwrap()),
            steps: Vec::new(),
        };
        assert_eq!(
            check_hint(&graph, &validation, &off_start),
            vec![Issue::FirstEdgeNotAtStart {
                edge: Edge::between(1, 2).unwrap()
            }]
        );
    }

    #[test]
    fn test_progressive_steps_pass() {
        let steps = vec![
            HintStep::text("A simple circuit. Any corner works!"),
            HintStep {
                text: "These corners work.".to_string(),
                show_valid_starts: true,
                show_first_edge: false,
            },
            HintStep::reveal_all("Start top-left and trace clockwise."),
        ];
        assert!(check_hint_steps(&steps).is_empty());
        assert!(check_hint_steps(&[]).is_empty());
    }

    #[test]
    fn test_step_defects_reported() {
        let steps = vec![HintStep::reveal_all("Everything at once.")];
        assert_eq!(
            check_hint_steps(&steps),
            vec![
                Issue::TooFewHintSteps { count: 1 },
                Issue::FirstStepRevealsOverlay,
            ]
        );

        let steps = vec![
            HintStep::text("Look closely."),
            HintStep::reveal_all("Here is the start."),
            HintStep::text("Hidden again."),
        ];
        assert_eq!(
            check_hint_steps(&steps),
            vec![
                Issue::LastStepHidesOverlay,
                Issue::OverlayWithdrawn { step: 3 },
            ]
        );
    }
}
