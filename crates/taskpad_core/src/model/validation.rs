//! Input validation predicates shared by the record type and the service.
//!
//! # Responsibility
//! - Own the single definition of a valid title and a valid task id.
//! - Carry the loosely typed id argument accepted at the service boundary.
//!
//! # Invariants
//! - A title is valid iff it is non-empty after trimming whitespace.
//! - An id is valid iff it is an integer strictly greater than zero.
//!   Booleans, floats, text and absent values are never valid ids, even when
//!   they look numeric (`true`, `1.0`, `"1"`).

use crate::model::task::TaskId;
use std::fmt::{Display, Formatter};

/// Id argument as received from a caller that may not be statically typed.
///
/// Service methods take `impl Into<TaskIdInput>`, so ordinary callers pass a
/// plain `i64` while untyped front-ends can forward what they actually got.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskIdInput {
    Integer(i64),
    Boolean(bool),
    Float(f64),
    Text(String),
    Missing,
}

impl Display for TaskIdInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Missing => f.write_str("<missing>"),
        }
    }
}

impl From<i64> for TaskIdInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for TaskIdInput {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for TaskIdInput {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for TaskIdInput {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for TaskIdInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TaskIdInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TaskIdInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<TaskIdInput>> From<Option<T>> for TaskIdInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Returns whether `title` is non-empty after trimming.
pub fn validate_task_title(title: &str) -> bool {
    !title.trim().is_empty()
}

/// Returns the id when `input` is a strictly positive integer.
pub fn validate_task_id(input: &TaskIdInput) -> Option<TaskId> {
    match input {
        TaskIdInput::Integer(value) if *value > 0 => Some(*value),
        _ => None,
    }
}
