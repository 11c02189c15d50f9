use thiserror::Error;

use crate::model::ValidationIssue;

/// Manifest decoding, validation and projection errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The stored pattern discriminant has no renderer. Indicates a data/code
    /// version mismatch and is never recovered locally.
    #[error("Unknown pattern strategy: {0:?}")]
    UnknownPatternStrategy(String),

    /// The stored termination discriminant has no renderer.
    #[error("Unknown termination strategy: {0:?}")]
    UnknownTerminationStrategy(String),

    #[error("Missing field `{field}` for strategy {strategy}")]
    MissingField {
        strategy: &'static str,
        field: &'static str,
    },

    #[error("Invalid value for `{field}`: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid manifest: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),

    #[error("Recurrence rule error: {0}")]
    Rule(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ManifestResult<T> = std::result::Result<T, ManifestError>;
