//! Core domain logic for Taskpad.
//! This crate is the single source of truth for task invariants.

pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{ValidationError, ValidationErrorKind, ValidationResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Task, TaskId, MAX_TASK_ID, UNASSIGNED_TASK_ID};
pub use model::validation::{validate_task_id, validate_task_title, TaskIdInput};
pub use repo::task_repo::{InMemoryTaskRepository, TaskPatch, TaskRepository};
pub use service::task_service::{TaskService, TaskUpdate};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
