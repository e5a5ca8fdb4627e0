use thiserror::Error;

use crate::validate::ValidationReport;

/// A record failed one or more documented constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} constraint violation(s):\n{report}", .report.len())]
pub struct ValidationError {
    pub report: ValidationReport,
}

/// Errors from document and schema lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("operation cannot be empty")]
    EmptyOperation,

    #[error("unknown operation: '{0}'")]
    UnknownOperation(String),

    #[error("unknown shape: '{0}'")]
    UnknownShape(String),
}
