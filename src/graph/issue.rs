//! Validation diagnostics.
//!
//! Every defect a check finds becomes one [`Issue`]. Issues are collected,
//! never raised: an authoring tool needs the whole list to fix a level in one
//! pass.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::types::{fmt_ids, Edge, NodeId};

/// The defect families an [`Issue`] can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    EmptyGraph,
    DanglingEdgeReference,
    DuplicateEdge,
    BadParity,
    Disconnected,
    HintMismatch,
    HintProgression,
    CatalogOrder,
    Generation,
}

/// One human-readable defect found in a level.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum Issue {
    // ============ Graph Structure ============
    /// The node set is empty
    #[error("Graph has no nodes")]
    EmptyGraph,

    /// An edge endpoint outside the node set
    #[error("Edge {edge} references invalid node {node}")]
    DanglingEdge { edge: Edge, node: NodeId },

    /// Same unordered pair seen again
    #[error("Duplicate edge {edge}")]
    DuplicateEdge { edge: Edge },

    /// Odd-degree count is neither 0 nor 2
    #[error(
        "Has {} odd-degree nodes (need 0 or 2): {}; degrees: {}",
        .odd_nodes.len(),
        fmt_ids(.odd_nodes),
        fmt_degrees(.degrees)
    )]
    BadParity {
        odd_nodes: Vec<NodeId>,
        degrees: BTreeMap<NodeId, usize>,
    },

    /// Nodes the traversal from `origin` never reached
    #[error("Not connected. Unreachable from node {origin}: {}", fmt_ids(.unreachable))]
    Disconnected {
        origin: NodeId,
        unreachable: Vec<NodeId>,
    },

    // ============ Hints ============
    /// Declared legal starts differ from the derived ones
    #[error("Declared start nodes {} do not match derived start nodes {}", fmt_ids(.declared), fmt_ids(.derived))]
    StartNodesMismatch {
        declared: Vec<NodeId>,
        derived: Vec<NodeId>,
    },

    /// The hinted first edge is not in the edge list
    #[error("First edge {edge} not found in edges")]
    FirstEdgeMissing { edge: Edge },

    /// The hinted first edge touches no legal start node
    #[error("First edge {edge} does not touch a legal start node")]
    FirstEdgeNotAtStart { edge: Edge },

    /// A hint was declared for a graph that admits no Eulerian walk
    #[error("Hint declared for a graph with no Eulerian walk")]
    HintOnInvalidGraph,

    /// Fewer than two hint steps
    #[error("Expected at least 2 hint steps, found {count}")]
    TooFewHintSteps { count: usize },

    /// The first hint step shows an overlay instead of text only
    #[error("First hint step should be text only")]
    FirstStepRevealsOverlay,

    /// The last hint step does not show both overlays
    #[error("Last hint step must show both the valid starts and the first edge")]
    LastStepHidesOverlay,

    /// A later step hides an overlay an earlier one showed
    #[error("Hint step {step} hides an overlay shown by step {}", .step - 1)]
    OverlayWithdrawn { step: usize },

    // ============ Catalog ============
    /// Level id used twice in one catalog
    #[error("Level id {id} is not unique")]
    DuplicateLevelId { id: u32 },

    /// Level ids are not sequential
    #[error("Level out of order: expected id {expected}, found {found}")]
    LevelOutOfOrder { expected: u32, found: u32 },

    /// A level follows the one numbered `u32::MAX`
    #[error("Level {found} follows the largest possible id {}", u32::MAX)]
    LevelIdExhausted { found: u32 },

    // ============ Generation ============
    /// The generator refused the level's template
    #[error("Template rejected: {message}")]
    TemplateRejected { message: String },
}

impl Issue {
    /// The defect family this issue belongs to.
    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::EmptyGraph => IssueKind::EmptyGraph,
            Issue::DanglingEdge { .. } => IssueKind::DanglingEdgeReference,
            Issue::DuplicateEdge { .. } => IssueKind::DuplicateEdge,
            Issue::BadParity { .. } => IssueKind::BadParity,
            Issue::Disconnected { .. } => IssueKind::Disconnected,
            Issue::StartNodesMismatch { .. }
            | Issue::FirstEdgeMissing { .. }
            | Issue::FirstEdgeNotAtStart { .. }
            | Issue::HintOnInvalidGraph => IssueKind::HintMismatch,
            Issue::TooFewHintSteps { .. }
            | Issue::FirstStepRevealsOverlay
            | Issue::LastStepHidesOverlay
            | Issue::OverlayWithdrawn { .. } => IssueKind::HintProgression,
            Issue::DuplicateLevelId { .. }
            | Issue::LevelOutOfOrder { .. }
            | Issue::LevelIdExhausted { .. } => IssueKind::CatalogOrder,
            Issue::TemplateRejected { .. } => IssueKind::Generation,
        }
    }
}

fn fmt_degrees(degrees: &BTreeMap<NodeId, usize>) -> String {
    let inner = degrees
        .iter()
        .map(|(node, degree)| format!("{}={}", node, degree))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", inner)
}
