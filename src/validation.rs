//! Input validation for disk scheduling requests.
//!
//! Checks a request before any policy runs. Detects:
//! - An empty disk (zero tracks)
//! - A head position outside the disk
//! - Requested tracks outside the disk
//!
//! The boundary adapter adds the malformed-value kinds (`NonInteger*`,
//! `MissingField`, `InvalidDirection`, `TooManyTracks`) while parsing raw input.

use std::fmt;

use crate::models::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The disk has no tracks.
    EmptyDisk,
    /// The head lies outside `[0, disk_size)`.
    HeadOutOfRange,
    /// A requested track lies outside `[0, disk_size)`.
    TrackOutOfRange,
    /// A queue element is not a non-negative integer.
    NonIntegerTrack,
    /// The head is not a non-negative integer.
    NonIntegerHead,
    /// The disk size is not a positive integer.
    InvalidDiskSize,
    /// The direction is not one of the known names.
    InvalidDirection,
    /// A required field is absent.
    MissingField,
    /// The queue is longer than the API accepts.
    TooManyTracks,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a scheduling request.
///
/// Checks:
/// 1. The disk has at least one track
/// 2. The head lies on the disk
/// 3. Every requested track lies on the disk
///
/// An empty queue is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let geometry = request.geometry;

    if geometry.size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDisk,
            "Disk size must be at least 1 track",
        ));
        // Every position is out of range; no point listing them all.
        return Err(errors);
    }

    if !geometry.contains(request.head) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!(
                "Head position {} outside disk range 0..{}",
                request.head, geometry.size
            ),
        ));
    }

    for (index, &track) in request.requests.iter().enumerate() {
        if !geometry.contains(track) {
            errors.push(ValidationError::new(
                ValidationErrorKind::TrackOutOfRange,
                format!(
                    "Track {} at position {} outside disk range 0..{}",
                    track, index, geometry.size
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
