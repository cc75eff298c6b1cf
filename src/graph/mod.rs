//! Puzzle graph representation and Eulerian validation.
//!
//! A level is a small undirected graph. It is playable when a single stroke
//! can trace every edge exactly once: the graph must be connected, free of
//! duplicate and dangling edges, and have 0 (circuit) or 2 (path) nodes of
//! odd degree. [`validate`] checks all of this in one pass and
//! [`derive_hint`] turns the result into the set of legal start nodes.

mod hint;
mod issue;
mod model;
mod types;
mod validate;

pub use hint::{check_first_edge, check_hint, check_hint_steps, derive_hint, Hint, HintStep};
pub use issue::{Issue, IssueKind};
pub use model::Graph;
pub use types::*;
pub use validate::{validate, Validation};
