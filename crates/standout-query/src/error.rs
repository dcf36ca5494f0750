//! Error types for the query crate.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when building a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A value was rejected by one or more of its validators.
    #[error("invalid value {value} for '{field}': {}", .reasons.join("; "))]
    Validation {
        field: String,
        value: String,
        reasons: Vec<String>,
    },

    /// A pagination parameter could not be parsed as an integer.
    #[error("invalid {field} '{input}': {source}")]
    Parse {
        field: &'static str,
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Operator name is not one of the known short names.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// Query configuration could not be parsed.
    #[error("invalid query config: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Query configuration parsed but its bounds are inconsistent.
    #[error("invalid query config: {0}")]
    ConfigBounds(String),

    /// Several failures, in the order they occurred.
    #[error("{}", display_lines(.0))]
    Multiple(Vec<QueryError>),
}

impl QueryError {
    /// Create a validation error.
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        reasons: Vec<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
            reasons,
        }
    }

    /// Joins a list of errors.
    ///
    /// Returns `None` for an empty list and the error itself for a list of one.
    pub fn join(mut errors: Vec<QueryError>) -> Option<QueryError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(QueryError::Multiple(errors)),
        }
    }

    /// Returns the individual errors, flattening nested joins.
    pub fn errors(&self) -> Vec<&QueryError> {
        match self {
            QueryError::Multiple(errors) => errors.iter().flat_map(|e| e.errors()).collect(),
            other => vec![other],
        }
    }

    /// Returns `true` if this is (or only contains) validation failures.
    pub fn is_validation(&self) -> bool {
        self.errors()
            .iter()
            .all(|e| matches!(e, QueryError::Validation { .. }))
    }
}

fn display_lines(errors: &[QueryError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returned by an [`EventStore`](crate::EventStore) when an append is made
/// against a stale version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("version conflict: expected {expected}, found {actual}")]
pub struct VersionConflict {
    /// Version the caller expected the stream to be at.
    pub expected: u64,
    /// Version the stream is actually at.
    pub actual: u64,
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
