//! Puzzle graph structure.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::types::{Edge, NodeId};
use crate::error::Result;

/// An immutable node/edge snapshot of one puzzle level.
///
/// Construction never validates: a `Graph` may hold dangling or duplicate
/// edges so that [`validate`](super::validate) can diagnose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Node identifiers, in their stable (ascending) order
    nodes: BTreeSet<NodeId>,
    /// Edges in authored order
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from its parts.
    pub fn new(nodes: impl IntoIterator<Item = NodeId>, edges: Vec<Edge>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            edges,
        }
    }

    /// Build a graph from raw ids and id pairs, rejecting self-loops.
    pub fn from_pairs(nodes: &[u32], pairs: &[(u32, u32)]) -> Result<Self> {
        let edges = pairs
            .iter()
            .map(|&(a, b)| Edge::between(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(nodes.iter().copied().map(NodeId), edges))
    }

    /// All node ids, ascending.
    pub fn nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }

    /// All edges, in authored order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether a node belongs to the graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Check whether an edge (in either orientation) is present.
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.iter().any(|e| e == edge)
    }

    /// The traversal origin: the smallest node id.
    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Incident-edge count for every node, isolated nodes included.
    ///
    /// Endpoints outside the node set are ignored here; they are reported
    /// separately as dangling references.
    pub fn degrees(&self) -> BTreeMap<NodeId, usize> {
        let mut degrees: BTreeMap<NodeId, usize> =
            self.nodes.iter().map(|&n| (n, 0)).collect();
        for edge in &self.edges {
            for node in edge.endpoints() {
                if let Some(d) = degrees.get_mut(&node) {
                    *d += 1;
                }
            }
        }
        degrees
    }

    /// Undirected adjacency over the node set.
    pub fn adjacency(&self) -> BTreeMap<NodeId, BTreeSet<NodeId>> {
        let mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> =
            self.nodes.iter().map(|&n| (n, BTreeSet::new())).collect();
        for edge in &self.edges {
            if !self.contains_node(edge.a()) || !self.contains_node(edge.b()) {
                continue;
            }
            if let Some(neighbors) = adjacency.get_mut(&edge.a()) {
                neighbors.insert(edge.b());
            }
            if let Some(neighbors) = adjacency.get_mut(&edge.b()) {
                neighbors.insert(edge.a());
            }
        }
        adjacency
    }
}
