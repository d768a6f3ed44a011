//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the id → task mapping and the id counter.
//! - Assign fresh ids to unassigned tasks on insert.
//!
//! # Invariants
//! - `next_id` only grows and saturates at `TaskId::MAX`; deleted ids are
//!   never handed out again.
//! - Listing preserves first-insertion order; overwriting an id keeps its slot.
//! - Missing ids are reported through `bool`/`Option`, never as errors.
//! - Writes do not re-validate field values; callers validate first.

use crate::model::task::{Task, TaskId};
use indexmap::IndexMap;
use log::debug;

/// Partial field set applied by `TaskRepository::update_task`.
///
/// `None` leaves the field untouched; `Some("")` overwrites with empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Returns whether applying this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// Repository interface for task storage.
pub trait TaskRepository {
    /// Inserts `task`, assigning an id when it is unassigned; returns the key used.
    fn add_task(&mut self, task: Task) -> TaskId;
    fn get_task(&self, id: TaskId) -> Option<Task>;
    fn list_tasks(&self) -> Vec<Task>;
    fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> bool;
    fn delete_task(&mut self, id: TaskId) -> bool;
    fn toggle_task(&mut self, id: TaskId) -> bool;
}

/// Process-local task repository.
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    tasks: IndexMap<TaskId, Task>,
    next_id: TaskId,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Id the next unassigned insert will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add_task(&mut self, mut task: Task) -> TaskId {
        if task.is_unassigned() {
            task.id = self.next_id;
            self.next_id = self.next_id.saturating_add(1);
        } else if task.id >= self.next_id {
            self.next_id = task.id.saturating_add(1);
        }

        let id = task.id;
        if self.tasks.insert(id, task).is_some() {
            debug!("event=task_overwrite module=repo status=ok task_id={id}");
        }
        id
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> bool {
        if patch.is_empty() {
            return self.tasks.contains_key(&id);
        }
        match self.tasks.get_mut(&id) {
            Some(task) => {
                patch.apply(task);
                true
            }
            None => false,
        }
    }

    fn delete_task(&mut self, id: TaskId) -> bool {
        self.tasks.shift_remove(&id).is_some()
    }

    fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }
}
