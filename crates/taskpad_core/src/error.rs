//! Caller-facing error type for task operations.
//!
//! # Invariants
//! - Every failure is caller-correctable; there is no internal/fatal kind.
//! - Messages contain a stable substring per kind (`positive integer`,
//!   `non-empty string`, `does not exist`) that front-ends may match on.

use crate::model::task::TaskId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Discriminates why an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Id is not an integer strictly greater than zero.
    InvalidId,
    /// Title is empty or whitespace-only.
    InvalidTitle,
    /// Id is well-formed but no live task carries it.
    NotFound,
}

/// Single error type returned by record construction and the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationError {
    pub fn invalid_id() -> Self {
        Self {
            kind: ValidationErrorKind::InvalidId,
            message: "Task ID must be a positive integer".to_string(),
        }
    }

    pub fn invalid_title() -> Self {
        Self {
            kind: ValidationErrorKind::InvalidTitle,
            message: "Task title must be non-empty string".to_string(),
        }
    }

    pub fn not_found(id: TaskId) -> Self {
        Self {
            kind: ValidationErrorKind::NotFound,
            message: format!("Task with ID {id} does not exist"),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ValidationError {}
