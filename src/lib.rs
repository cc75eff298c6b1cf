//! # Eulerline
//!
//! Level validation and constructive generation for one-stroke line-drawing
//! puzzles, where the player must trace every edge of a small graph exactly
//! once without lifting the pen.
//!
//! This library provides:
//! - An Eulerian validity engine that classifies a graph as a circuit, a path
//!   or invalid, and reports every defect in one pass
//! - Derivation of the legal start nodes a level's hints must agree with
//! - A constructive generator building levels that are valid by design
//! - A line-oriented catalog language and a batch pass/fail report
//!
//! ## Architecture
//!
//! - [`graph`] - Node/edge value types, validation and hint derivation
//! - [`generator`] - Cycle + chord-triplet templates, self-checked on build
//! - [`catalog`] - Parser for level catalogs and catalog-wide checks
//! - [`report`] - Human-readable and serializable pass/fail reports
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! eulerline check levels.cat            # non-zero exit if any level fails
//! eulerline generate --nodes 9 --triplet 0,3,6
//! ```
//!
//! ### Library
//!
//! ```
//! use eulerline::graph::{validate, Classification, Graph};
//!
//! let graph = Graph::from_pairs(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)])?;
//! let validation = validate(&graph);
//! assert_eq!(validation.classification, Classification::Path);
//! assert!(validation.issues.is_empty());
//! # Ok::<(), eulerline::EulerlineError>(())
//! ```
//!
//! ## Validity Rules
//!
//! A graph admits an Eulerian walk when it is connected and 0 (circuit) or
//! 2 (path) of its nodes have odd degree. Levels additionally may not repeat
//! an unordered node pair or reference nodes outside their node set.

pub mod catalog;
pub mod error;
pub mod generator;
pub mod graph;
pub mod report;

// Re-export main types for convenience
pub use error::{EulerlineError, Result};
pub use generator::Template;
pub use graph::{validate, Classification, Graph, Validation};
pub use report::CatalogReport;
