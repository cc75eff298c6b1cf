//! Error types for Eulerline.
//!
//! [`EulerlineError`] covers the conditions that stop an operation outright:
//! malformed catalog text, unreadable files, and generator templates that fail
//! their own self-check. Defects found while validating a graph are *not*
//! errors; they are collected as [`Issue`](crate::graph::Issue) values so a
//! single pass reports all of them.

use thiserror::Error;

use crate::graph::{fmt_ids, Classification, Issue, NodeId};

/// Result type alias using [`EulerlineError`].
pub type Result<T> = std::result::Result<T, EulerlineError>;

/// Unified error type for all Eulerline operations.
#[derive(Error, Debug)]
pub enum EulerlineError {
    // ============ Catalog Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    // ============ Graph Construction Errors ============
    /// An edge whose two endpoints are the same node
    #[error("Edge ({node},{node}) is a self-loop")]
    SelfLoop { node: NodeId },

    /// Template parameters that cannot describe a graph at all
    #[error("Invalid template: {message}")]
    InvalidTemplate { message: String },

    // ============ Generation Errors ============
    /// The generated graph failed validation
    #[error("Template rejected by validation ({} issue(s)): {}", .issues.len(), join_issues(.issues))]
    TemplateRejected { issues: Vec<Issue> },

    /// The generated graph validated, but not as the template's degree argument predicts
    #[error(
        "Template predicted {expected} with odd nodes {}, validator found {found} with odd nodes {}",
        fmt_ids(.expected_odd),
        fmt_ids(.found_odd)
    )]
    PredictionMismatch {
        expected: Classification,
        expected_odd: Vec<NodeId>,
        found: Classification,
        found_odd: Vec<NodeId>,
    },

    // ============ I/O Errors ============
    /// Error reading a catalog file
    #[error("Failed to read catalog file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report
    #[error("Failed to write report: {message}")]
    ReportError { message: String },
}

impl EulerlineError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid template error
    pub fn invalid_template(message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            message: message.into(),
        }
    }
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
