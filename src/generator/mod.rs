//! Constructive level generation.
//!
//! Levels built here are valid by construction rather than by search:
//!
//! - a ring `0-1-...-(n-1)-0` gives every node degree 2, a circuit;
//! - a chord triplet `{x, y, z}` adds `x-y`, `y-z`, `z-x`, raising each of
//!   the three degrees by 2, so any number of node-disjoint triplets keep the
//!   circuit;
//! - one extra chord `u-v` makes `u` and `v` odd, turning the circuit into a
//!   path that must start at `u` or `v`.
//!
//! Every generated graph is still run through [`validate`](crate::graph::validate)
//! before it is handed out.
//!
//! # Example
//!
//! ```
//! use eulerline::generator::Template;
//! use eulerline::graph::Classification;
//!
//! let level = Template::cycle(13)?
//!     .with_triplet([0, 4, 8])
//!     .with_triplet([1, 5, 9])
//!     .with_triplet([3, 7, 11])
//!     .with_chord(2, 10)
//!     .generate()?;
//! assert_eq!(level.validation.classification, Classification::Path);
//! # Ok::<(), eulerline::EulerlineError>(())
//! ```

mod template;

pub use template::{Generated, Template};
