//! Task domain model.
//!
//! # Responsibility
//! - Define the four-field task record.
//! - Enforce record invariants on every construction path, deserialization
//!   included.
//!
//! # Invariants
//! - `title` is non-empty after trimming.
//! - `id` is never negative and never `TaskId::MAX`. `0` is the unassigned
//!   sentinel and is replaced by the repository on insert.

use crate::error::{ValidationError, ValidationResult};
use crate::model::validation::validate_task_title;
use serde::{Deserialize, Serialize};

/// Integer identity of a task inside one repository.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Id placeholder meaning "not yet assigned by the repository".
pub const UNASSIGNED_TASK_ID: TaskId = 0;

/// Largest id a record may carry. `TaskId::MAX` is reserved so the
/// repository counter (`id + 1`) always stays representable.
pub const MAX_TASK_ID: TaskId = TaskId::MAX - 1;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Builds a validated record.
    ///
    /// The title is stored as given; trimming is the service layer's job.
    ///
    /// # Errors
    /// - `InvalidTitle` when `title` is blank.
    /// - `InvalidId` when `id` is negative or above `MAX_TASK_ID`.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> ValidationResult<Self> {
        let task = Self {
            id,
            title: title.into(),
            description: description.into(),
            completed,
        };
        task.validate()?;
        Ok(task)
    }

    /// Builds an open task with the unassigned sentinel id.
    pub fn unassigned(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> ValidationResult<Self> {
        Self::new(UNASSIGNED_TASK_ID, title, description, false)
    }

    /// Re-checks record invariants.
    pub fn validate(&self) -> ValidationResult<()> {
        if !validate_task_title(&self.title) {
            return Err(ValidationError::invalid_title());
        }
        if !(UNASSIGNED_TASK_ID..=MAX_TASK_ID).contains(&self.id) {
            return Err(ValidationError::invalid_id());
        }
        Ok(())
    }

    /// Returns whether the repository still has to assign an id.
    pub fn is_unassigned(&self) -> bool {
        self.id <= UNASSIGNED_TASK_ID
    }
}

/// Unvalidated wire shape; converted through `Task::new`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        Task::new(value.id, value.title, value.description, value.completed)
    }
}
