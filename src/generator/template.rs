//! Cycle, triplet and chord templates.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::error::{EulerlineError, Result};
use crate::graph::{derive_hint, validate, Classification, Edge, Graph, NodeId, Validation};

/// Parameters of a constructed level.
///
/// Nodes are `0..nodes`, joined in a ring. Each triplet `{x, y, z}` adds the
/// edges `x-y`, `y-z`, `z-x`, raising each of its three nodes' degree by two.
/// An optional chord `u-v` then flips `u` and `v` to odd degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: u32,
    triplets: Vec<[NodeId; 3]>,
    chord: Option<(NodeId, NodeId)>,
}

/// A graph produced by [`Template::generate`], already validated.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The constructed graph
    pub graph: Graph,
    /// Its validation result (always issue-free)
    pub validation: Validation,
    /// Legal start nodes
    pub valid_starts: Vec<NodeId>,
}

impl Template {
    /// A ring of `nodes` nodes. Needs at least three: smaller rings are a
    /// self-loop or a doubled edge.
    pub fn cycle(nodes: u32) -> Result<Self> {
        if nodes < 3 {
            return Err(EulerlineError::invalid_template(format!(
                "a base cycle needs at least 3 nodes, got {}",
                nodes
            )));
        }
        Ok(Self {
            nodes,
            triplets: Vec::new(),
            chord: None,
        })
    }

    /// Layer a chord triplet onto the template.
    pub fn with_triplet(mut self, triplet: [u32; 3]) -> Self {
        self.triplets.push(triplet.map(NodeId));
        self
    }

    /// Add the single extra chord that turns a circuit into a path.
    pub fn with_chord(mut self, u: u32, v: u32) -> Self {
        self.chord = Some((NodeId(u), NodeId(v)));
        self
    }

    /// Number of nodes in the base cycle.
    pub fn node_count(&self) -> u32 {
        self.nodes
    }

    /// Triplets in the order they were added.
    pub fn triplets(&self) -> &[[NodeId; 3]] {
        &self.triplets
    }

    /// The extra chord, if any.
    pub fn chord(&self) -> Option<(NodeId, NodeId)> {
        self.chord
    }

    /// Check whether no node appears in two triplets.
    pub fn triplets_disjoint(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.triplets
            .iter()
            .flatten()
            .all(|&node| seen.insert(node))
    }

    /// Classification and odd nodes implied by the degree argument alone.
    ///
    /// Only defined when the triplets are pairwise node-disjoint: every node
    /// then has even degree before the chord, so the chord's endpoints are
    /// exactly the odd ones.
    pub fn predicted(&self) -> Option<(Classification, Vec<NodeId>)> {
        if !self.triplets_disjoint() {
            return None;
        }
        Some(match self.chord {
            None => (Classification::Circuit, Vec::new()),
            Some((u, v)) => {
                let mut odd = vec![u, v];
                odd.sort();
                (Classification::Path, odd)
            }
        })
    }

    /// Lay out the template's edges: ring, then triplets, then the chord.
    pub fn build(&self) -> Result<Graph> {
        let mut edges = Vec::new();
        for i in 0..self.nodes {
            edges.push(Edge::between(i, (i + 1) % self.nodes)?);
        }
        for &[x, y, z] in &self.triplets {
            edges.push(Edge::new(x, y)?);
            edges.push(Edge::new(y, z)?);
            edges.push(Edge::new(z, x)?);
        }
        if let Some((u, v)) = self.chord {
            edges.push(Edge::new(u, v)?);
        }
        Ok(Graph::new((0..self.nodes).map(NodeId), edges))
    }

    /// Build the graph and run it back through the validator.
    ///
    /// Any reported issue, or a classification other than the predicted one,
    /// means the template parameters are wrong; the candidate is rejected
    /// rather than repaired.
    pub fn generate(&self) -> Result<Generated> {
        let graph = self.build()?;
        let validation = validate(&graph);

        if !validation.is_valid() {
            warn!(
                "template with {} nodes rejected: {} issue(s)",
                self.nodes,
                validation.issues.len()
            );
            return Err(EulerlineError::TemplateRejected {
                issues: validation.issues,
            });
        }

        match self.predicted() {
            Some((expected, expected_odd))
                if expected != validation.classification || expected_odd != validation.odd_nodes =>
            {
                return Err(EulerlineError::PredictionMismatch {
                    expected,
                    expected_odd,
                    found: validation.classification,
                    found_odd: validation.odd_nodes,
                });
            }
            Some(_) => {}
            None => debug!("overlapping triplets, parity taken from the validator alone"),
        }

        let valid_starts = derive_hint(
            validation.classification,
            &validation.odd_nodes,
            graph.nodes(),
        )
        .unwrap_or_default();

        debug!(
            "generated {} nodes, {} edges: {} starting at {:?}",
            graph.node_count(),
            graph.edge_count(),
            validation.classification,
            valid_starts
        );

        Ok(Generated {
            graph,
            validation,
            valid_starts,
        })
    }
}
