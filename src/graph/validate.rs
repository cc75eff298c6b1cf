//! Eulerian validity checks.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use log::debug;
use serde::Serialize;

use super::issue::Issue;
use super::types::{Classification, NodeId};
use super::Graph;

/// Outcome of validating one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// Circuit, path or invalid
    pub classification: Classification,
    /// Odd-degree nodes, ascending; reported even when the graph is invalid
    pub odd_nodes: Vec<NodeId>,
    /// Degree of every node
    pub degrees: BTreeMap<NodeId, usize>,
    /// Every defect found; empty iff the graph is playable
    pub issues: Vec<Issue>,
}

impl Validation {
    /// Check whether no issue was found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate a graph for a one-stroke puzzle.
///
/// Checks, all run regardless of earlier failures:
/// - every edge endpoint belongs to the node set
/// - no unordered pair appears twice
/// - 0 or 2 nodes have odd degree
/// - every node is reachable from the smallest node id
pub fn validate(graph: &Graph) -> Validation {
    let mut issues = Vec::new();

    if graph.nodes().is_empty() {
        issues.push(Issue::EmptyGraph);
    }

    // Edge references
    for edge in graph.edges() {
        for node in edge.endpoints() {
            if !graph.contains_node(node) {
                issues.push(Issue::DanglingEdge { edge: *edge, node });
            }
        }
    }

    // Duplicates
    let mut seen = HashSet::new();
    for edge in graph.edges() {
        if !seen.insert(edge.key()) {
            issues.push(Issue::DuplicateEdge { edge: *edge });
        }
    }

    // Parity
    let degrees = graph.degrees();
    let odd_nodes: Vec<NodeId> = degrees
        .iter()
        .filter(|&(_, &degree)| degree % 2 != 0)
        .map(|(&node, _)| node)
        .collect();
    if !matches!(odd_nodes.len(), 0 | 2) {
        issues.push(Issue::BadParity {
            odd_nodes: odd_nodes.clone(),
            degrees: degrees.clone(),
        });
    }

    // Connectivity
    if let Some(origin) = graph.origin() {
        let reached = reachable_from(graph, origin);
        let unreachable: Vec<NodeId> = graph
            .nodes()
            .iter()
            .filter(|node| !reached.contains(*node))
            .copied()
            .collect();
        if !unreachable.is_empty() {
            issues.push(Issue::Disconnected {
                origin,
                unreachable,
            });
        }
    }

    let classification = match (issues.is_empty(), odd_nodes.len()) {
        (true, 0) => Classification::Circuit,
        (true, 2) => Classification::Path,
        _ => Classification::Invalid,
    };

    debug!(
        "validated {} nodes, {} edges: {} (odd nodes {:?}, {} issue(s))",
        graph.node_count(),
        graph.edge_count(),
        classification,
        odd_nodes,
        issues.len()
    );

    Validation {
        classification,
        odd_nodes,
        degrees,
        issues,
    }
}

/// Breadth-first traversal over the undirected adjacency.
fn reachable_from(graph: &Graph, origin: NodeId) -> BTreeSet<NodeId> {
    let adjacency = graph.adjacency();
    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();

    visited.insert(origin);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        let Some(neighbors) = adjacency.get(&current) else {
            continue;
        };
        for &neighbor in neighbors {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, IssueKind};

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    fn kinds(validation: &Validation) -> Vec<IssueKind> {
        validation.issues.iter().map(Issue::kind).collect()
    }

    #[test]
    fn test_triangle_is_circuit() {
        let graph = Graph::from_pairs(&[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let validation = validate(&graph);
        assert_eq!(validation.classification, Classification::Circuit);
        assert!(validation.odd_nodes.is_empty());
        assert!(validation.is_valid());
    }

    #[test]
    fn test_duplicate_edge_reported() {
        let graph = Graph::from_pairs(&[0, 1, 2], &[(0, 1), (1, 0)]).unwrap();
        let validation = validate(&graph);
        assert_eq!(validation.classification, Classification::Invalid);
        assert!(validation.issues.contains(&Issue::DuplicateEdge {
            edge: Edge::between(1, 0).unwrap()
        }));
        assert!(validation
            .issues
            .iter()
            .any(|issue| issue.to_string() == "Duplicate edge (1,0)"));
    }

    #[test]
    fn test_disconnected_pairs() {
        let graph = Graph::from_pairs(&[0, 1, 2, 3], &[(0, 1), (2, 3)]).unwrap();
        let validation = validate(&graph);
        assert_eq!(validation.classification, Classification::Invalid);
        assert!(validation.issues.contains(&Issue::Disconnected {
            origin: NodeId(0),
            unreachable: ids(&[2, 3]),
        }));
        // Four odd nodes as well: both defects are reported in one pass.
        assert_eq!(
            kinds(&validation),
            vec![IssueKind::BadParity, IssueKind::Disconnected]
        );
        assert_eq!(validation.odd_nodes, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_seven_cycle_with_skip_chords_is_circuit() {
        let mut pairs: Vec<(u32, u32)> = (0..7).map(|i| (i, (i + 1) % 7)).collect();
        pairs.extend((0..7).map(|i| (i, (i + 2) % 7)));
        let graph = Graph::from_pairs(&[0, 1, 2, 3, 4, 5, 6], &pairs).unwrap();
        let validation = validate(&graph);
        assert_eq!(validation.classification, Classification::Circuit);
        assert!(validation.degrees.values().all(|&d| d == 4));
    }

    #[test]
    fn test_chain_is_path() {
        let pairs: Vec<(u32, u32)> = (0..7).map(|i| (i, i + 1)).collect();
        let graph = Graph::from_pairs(&[0, 1, 2, 3, 4, 5, 6, 7], &pairs).unwrap();
        let validation = validate(&graph);
        assert_eq!(validation.classification, Classification::Path);
        assert_eq!(validation.odd_nodes, ids(&[0, 7]));
    }

    #[test]
    fn test_zigzag_with_four_cross_edges_has_six_odd_nodes() {
        let mut pairs: Vec<(u32, u32)> = (0..7).map(|i| (i, i + 1)).collect();
        pairs.extend([(1, 3), (2, 4), (3, 5), (4, 6)]);
        let graph = Graph::from_pairs(&[0, 1, 2, 3, 4, 5, 6, 7], &pairs).unwrap();
        let validation = validate(&graph);
        let degrees: Vec<usize> = validation.degrees.values().copied().collect();
        assert_eq!(degrees, vec![1, 3, 3, 4, 4, 3, 3, 1]);
        assert_eq!(validation.odd_nodes, ids(&[0, 1, 2, 5, 6, 7]));
        assert_eq!(validation.classification, Classification::Invalid);
        assert_eq!(kinds(&validation), vec![IssueKind::BadParity]);
    }

    #[test]
    fn test_zigzag_ladder_is_path() {
        let mut pairs: Vec<(u32, u32)> = (0..7).map(|i| (i, i + 1)).collect();
        pairs.extend((0..6).map(|i| (i, i + 2)));
        let graph = Graph::from_pairs(&[0, 1, 2, 3, 4, 5, 6, 7], &pairs).unwrap();
        let validation = validate(&graph);
        let degrees: Vec<usize> = validation.degrees.values().copied().collect();
        assert_eq!(degrees, vec![2, 3, 4, 4, 4, 4, 3, 2]);
        assert_eq!(validation.classification, Classification::Path);
        assert_eq!(validation.odd_nodes, ids(&[1, 6]));
    }

    #[test]
    fn test_dangling_endpoints_reported_individually() {
        let graph = Graph::from_pairs(&[0, 1], &[(0, 1), (5, 6)]).unwrap();
        let validation = validate(&graph);
        let dangling: Vec<String> = validation
            .issues
            .iter()
            .filter(|issue| issue.kind() == IssueKind::DanglingEdgeReference)
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            dangling,
            vec![
                "Edge (5,6) references invalid node 5",
                "Edge (5,6) references invalid node 6",
            ]
        );
        // Parity ignores the dangling edge: 0 and 1 both have degree 1.
        assert_eq!(validation.odd_nodes, ids(&[0, 1]));
        assert_eq!(validation.classification, Classification::Invalid);
    }

    #[test]
    fn test_edgeless_graphs() {
        let single = Graph::from_pairs(&[3], &[]).unwrap();
        assert_eq!(validate(&single).classification, Classification::Circuit);

        let pair = Graph::from_pairs(&[0, 1], &[]).unwrap();
        let validation = validate(&pair);
        assert_eq!(validation.classification, Classification::Invalid);
        assert_eq!(kinds(&validation), vec![IssueKind::Disconnected]);
    }

    #[test]
    fn test_empty_node_set_is_invalid() {
        let validation = validate(&Graph::new([], Vec::new()));
        assert_eq!(validation.classification, Classification::Invalid);
        assert_eq!(validation.issues, vec![Issue::EmptyGraph]);
    }

    #[test]
    fn test_odd_count_is_always_even() {
        let graphs = [
            Graph::from_pairs(&[0, 1, 2, 3], &[(0, 1), (2, 3)]).unwrap(),
            Graph::from_pairs(&[0, 1, 2, 3], &[(0, 1), (0, 2), (0, 3)]).unwrap(),
            Graph::from_pairs(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap(),
        ];
        for graph in &graphs {
            assert_eq!(validate(graph).odd_nodes.len() % 2, 0);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let graph = Graph::from_pairs(&[0, 1, 2, 3], &[(0, 1), (1, 2), (1, 0), (3, 9)]).unwrap();
        assert_eq!(validate(&graph), validate(&graph));
    }
}
