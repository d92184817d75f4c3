//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced before any policy runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Head or track outside the disk, or a malformed value.
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Policy identifier outside the closed set of six.
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),
}

impl ScheduleError {
    /// Wraps a single validation error.
    pub fn invalid(error: ValidationError) -> Self {
        ScheduleError::InvalidInput(vec![error])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
