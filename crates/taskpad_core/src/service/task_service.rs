//! Task use-case service.
//!
//! # Responsibility
//! - Validate caller input before it reaches the repository.
//! - Translate repository absence (`false`/`None`) into `NotFound` errors.
//!
//! # Invariants
//! - Id validation runs before any repository access, so a malformed id is
//!   always reported as `InvalidId`, never as `NotFound`.
//! - Titles are trimmed before storage; descriptions are stored as given.
//! - This is the only layer that returns errors for task operations.

use crate::error::{ValidationError, ValidationResult};
use crate::model::task::{Task, TaskId};
use crate::model::validation::{validate_task_id, validate_task_title, TaskIdInput};
use crate::repo::task_repo::{TaskPatch, TaskRepository};
use log::{debug, info};

/// Requested field changes for `TaskService::update`.
///
/// `None` means "not provided" and leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TaskUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: Some(description.into()),
        }
    }
}

/// Use-case service over a task repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an open task and returns its assigned id.
    ///
    /// # Contract
    /// - Rejects a blank title with `InvalidTitle`.
    /// - Stores the trimmed title; a missing description becomes `""`.
    pub fn create(&mut self, title: &str, description: Option<&str>) -> ValidationResult<TaskId> {
        let title = checked_title(title)?;
        let task = Task::unassigned(title, description.unwrap_or_default())?;
        let id = self.repo.add_task(task);
        info!("event=task_create module=service status=ok task_id={id}");
        Ok(id)
    }

    /// Lists all tasks in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.repo.list_tasks()
    }

    /// Gets one task by id.
    pub fn get_by_id(&self, id: impl Into<TaskIdInput>) -> ValidationResult<Task> {
        let id = checked_id(id.into())?;
        self.repo.get_task(id).ok_or_else(|| not_found("get", id))
    }

    /// Applies whichever of title/description `update` provides.
    ///
    /// A provided title must be non-blank and is trimmed. A provided
    /// description may be empty.
    pub fn update(&mut self, id: impl Into<TaskIdInput>, update: TaskUpdate) -> ValidationResult<()> {
        let id = checked_id(id.into())?;
        let title = update.title.as_deref().map(checked_title).transpose()?;

        let patch = TaskPatch {
            title: title.map(str::to_string),
            description: update.description,
            completed: None,
        };
        if !self.repo.update_task(id, patch) {
            return Err(not_found("update", id));
        }

        info!("event=task_update module=service status=ok task_id={id}");
        Ok(())
    }

    /// Deletes one task by id.
    pub fn delete(&mut self, id: impl Into<TaskIdInput>) -> ValidationResult<()> {
        let id = checked_id(id.into())?;
        if !self.repo.delete_task(id) {
            return Err(not_found("delete", id));
        }

        info!("event=task_delete module=service status=ok task_id={id}");
        Ok(())
    }

    /// Flips the completion flag of one task.
    pub fn toggle_completion(&mut self, id: impl Into<TaskIdInput>) -> ValidationResult<()> {
        let id = checked_id(id.into())?;
        if !self.repo.toggle_task(id) {
            return Err(not_found("toggle", id));
        }

        info!("event=task_toggle module=service status=ok task_id={id}");
        Ok(())
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

fn checked_id(input: TaskIdInput) -> ValidationResult<TaskId> {
    validate_task_id(&input).ok_or_else(|| {
        debug!("event=task_id_rejected module=service status=error input={input}");
        ValidationError::invalid_id()
    })
}

fn checked_title(title: &str) -> ValidationResult<&str> {
    if !validate_task_title(title) {
        debug!("event=task_title_rejected module=service status=error");
        return Err(ValidationError::invalid_title());
    }
    Ok(title.trim())
}

fn not_found(op: &str, id: TaskId) -> ValidationError {
    debug!("event=task_{op} module=service status=not_found task_id={id}");
    ValidationError::not_found(id)
}
