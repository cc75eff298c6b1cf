//! Pass/fail reports for a validated catalog.
//!
//! The engine only produces [`CatalogReport`] values; this module turns them
//! into text for a terminal or CI log. JSON output goes through `serde`.

use std::fmt;

use serde::Serialize;

use crate::graph::{fmt_ids, Classification, Issue, NodeId};

/// Validation outcome for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub id: u32,
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub classification: Classification,
    /// Odd-degree nodes, ascending
    pub odd_nodes: Vec<NodeId>,
    /// Derived legal start nodes; empty when invalid
    pub valid_starts: Vec<NodeId>,
    pub issues: Vec<Issue>,
}

impl LevelReport {
    /// Check whether the level passed every check.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validation outcome for a whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    /// Per-level results, in catalog order
    pub levels: Vec<LevelReport>,
    /// Issues that concern the catalog as a whole (ids, ordering)
    pub catalog_issues: Vec<Issue>,
}

impl CatalogReport {
    /// Total number of issues across levels and the catalog itself.
    pub fn total_issues(&self) -> usize {
        self.catalog_issues.len() + self.levels.iter().map(|l| l.issues.len()).sum::<usize>()
    }

    /// Check whether nothing was reported.
    pub fn passed(&self) -> bool {
        self.total_issues() == 0
    }

    /// Process exit status for a batch run: non-zero iff any issue.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} levels", self.levels.len())?;
        writeln!(f)?;

        for level in &self.levels {
            let summary = format!("{} nodes, {} edges", level.node_count, level.edge_count);
            if level.passed() {
                writeln!(
                    f,
                    "Level {} ({}) - OK ({}, {})",
                    level.id,
                    level.name,
                    summary,
                    describe(level)
                )?;
            } else {
                writeln!(f, "Level {} ({}) - {}:", level.id, level.name, summary)?;
                for issue in &level.issues {
                    writeln!(f, "  ERROR: {}", issue)?;
                }
                writeln!(f)?;
            }
        }

        if !self.catalog_issues.is_empty() {
            writeln!(f, "Catalog:")?;
            for issue in &self.catalog_issues {
                writeln!(f, "  ERROR: {}", issue)?;
            }
        }

        writeln!(f)?;
        write!(
            f,
            "Total: {} levels, {} issues",
            self.levels.len(),
            self.total_issues()
        )
    }
}

fn describe(level: &LevelReport) -> String {
    match level.classification {
        Classification::Path => format!("Path from {}", fmt_ids(&level.odd_nodes)),
        other => other.to_string(),
    }
}
