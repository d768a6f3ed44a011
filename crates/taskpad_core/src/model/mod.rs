//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and the validation predicates it shares with the
//!   service layer.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` assigned once by the repository.
//! - Deletion is a hard delete; ids are never recycled.

pub mod task;
pub mod validation;
