//! Core value types for puzzle graphs.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::{EulerlineError, Result};

/// An opaque identifier for a node in a puzzle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

/// An undirected connection between two distinct nodes.
///
/// The endpoints are kept in the order they were written so diagnostics can
/// quote the edge as authored, but equality and hashing go through
/// [`Edge::key`]: `(a, b)` and `(b, a)` are the same edge.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge(NodeId, NodeId);

impl Edge {
    /// Create an edge, rejecting self-loops.
    pub fn new(a: NodeId, b: NodeId) -> Result<Self> {
        if a == b {
            return Err(EulerlineError::SelfLoop { node: a });
        }
        Ok(Edge(a, b))
    }

    /// Create an edge from raw ids.
    pub fn between(a: u32, b: u32) -> Result<Self> {
        Self::new(NodeId(a), NodeId(b))
    }

    /// First endpoint as written.
    pub fn a(&self) -> NodeId {
        self.0
    }

    /// Second endpoint as written.
    pub fn b(&self) -> NodeId {
        self.1
    }

    /// Both endpoints as written.
    pub fn endpoints(&self) -> [NodeId; 2] {
        [self.0, self.1]
    }

    /// Canonical `(min, max)` form used for equality and hashing.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.0 <= self.1 {
            (self.0, self.1)
        } else {
            (self.1, self.0)
        }
    }

    /// Check whether the edge touches `node`.
    pub fn contains(&self, node: NodeId) -> bool {
        self.0 == node || self.1 == node
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// Whether a graph admits an Eulerian walk, and of which kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    /// Connected, every node has even degree: a closed walk exists.
    Circuit,
    /// Connected, exactly two odd-degree nodes: an open walk exists between them.
    Path,
    /// Anything else.
    Invalid,
}

impl Classification {
    /// `Circuit` and `Path` are playable; `Invalid` is not.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Circuit => write!(f, "Circuit"),
            Classification::Path => write!(f, "Path"),
            Classification::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Format a list of node ids as `[0, 1, 2]`.
pub fn fmt_ids(ids: &[NodeId]) -> String {
    let inner = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}
