//! Level catalog language.
//!
//! A catalog is a line-oriented text file listing puzzle levels. Each level
//! either spells out its graph or names a constructive template.
//!
//! # Grammar Overview
//!
//! ```text
//! catalog   = { line }
//! line      = comment | directive | empty
//! comment   = ('#' | ';') { any_char }
//! directive = '.' name { argument }
//!
//! .level <id> "<name>"              start a level
//! .nodes <id>...                    explicit node ids
//! .edges (<a> <b>)...               explicit edges
//! .cycle <n>                        base ring 0..n-1 (instead of .nodes/.edges)
//! .triplet <x> <y> <z>              chord triplet on the ring
//! .chord <u> <v>                    single extra chord
//! .starts <id>...                   declared legal start nodes
//! .first <a> <b>                    declared first edge
//! .step "<text>" [starts] [edge]    hint step and the overlays it reveals
//! ```
//!
//! Commas between arguments are ignored.
//!
//! # Example
//!
//! ```text
//! .level 1 "The Triangle"
//! .nodes 0 1 2
//! .edges (0 1) (1 2) (2 0)
//! .starts 0 1 2
//! .first 0 1
//! .step "This is a circuit. Start at any corner!"
//! .step "Try starting at the top and going left." starts edge
//!
//! .level 31 "The Compass"
//! .cycle 9
//! .triplet 0 3 6
//! ```

mod ast;
mod level;
mod lexer;
mod parser;
mod writer;

pub use ast::*;
pub use level::Level;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use writer::write_level;

use std::collections::BTreeSet;
use std::path::Path;

use log::info;

use crate::error::{EulerlineError, Result};
use crate::graph::Issue;
use crate::report::CatalogReport;

/// Parse catalog text into an AST.
pub fn parse(input: &str) -> Result<CatalogAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a catalog file.
pub fn parse_file(path: &Path) -> Result<CatalogAst> {
    let content = std::fs::read_to_string(path).map_err(|e| EulerlineError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

/// Parse catalog text and assemble every level.
pub fn load(input: &str) -> Result<Vec<Level>> {
    parse(input)?
        .levels
        .into_iter()
        .map(Level::from_def)
        .collect()
}

/// Read a catalog file and assemble every level.
pub fn load_file(path: &Path) -> Result<Vec<Level>> {
    let levels = parse_file(path)?
        .levels
        .into_iter()
        .map(Level::from_def)
        .collect::<Result<Vec<_>>>()?;
    info!("loaded {} level(s) from {}", levels.len(), path.display());
    Ok(levels)
}

/// Check every level, then the catalog's numbering.
///
/// Level ids must be unique and each must follow its predecessor by one.
pub fn check_catalog(levels: &[Level]) -> CatalogReport {
    let reports = levels.iter().map(Level::check).collect();

    let mut catalog_issues = Vec::new();

    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for level in levels {
        if !seen.insert(level.id) && reported.insert(level.id) {
            catalog_issues.push(Issue::DuplicateLevelId { id: level.id });
        }
    }

    // Only the first break in the numbering is reported.
    for pair in levels.windows(2) {
        let (prev, level) = (&pair[0], &pair[1]);
        match prev.id.checked_add(1) {
            Some(expected) if expected == level.id => continue,
            Some(expected) => catalog_issues.push(Issue::LevelOutOfOrder {
                expected,
                found: level.id,
            }),
            None => catalog_issues.push(Issue::LevelIdExhausted { found: level.id }),
        }
        break;
    }

    CatalogReport {
        levels: reports,
        catalog_issues,
    }
}
