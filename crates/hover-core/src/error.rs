// File: crates/hover-core/src/error.rs
// Summary: Crate error type.

use std::fmt;

/// A single rejected settings field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse tooltip settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tooltip settings ({} issue(s)): {}", .0.len(), join(.0))]
    Invalid(Vec<ValidationIssue>),
}

pub type Result<T> = std::result::Result<T, Error>;

fn join(issues: &[ValidationIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
