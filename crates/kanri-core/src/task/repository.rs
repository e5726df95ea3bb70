//! Task repository trait.
//!
//! Defines the interface for task persistence operations.

use super::model::{Task, TaskStatus};
use super::request::{CreateTaskRequest, UpdateTaskRequest};
use crate::error::Result;

/// An abstract repository for managing task persistence.
///
/// This trait defines the contract for persisting and retrieving tasks,
/// decoupling the application's core logic from the specific storage
/// mechanism. Every operation works on the whole collection: read it,
/// mutate it in memory, write it back. There is no locking; concurrent
/// writers race and the last write wins.
pub trait TaskRepository: Send + Sync {
    /// Retrieves all tasks, newest first.
    ///
    /// Ordered by `created_at` descending; equal timestamps fall back to
    /// `id` ascending so the order is total.
    fn list(&self) -> Result<Vec<Task>>;

    /// Looks up a single task by id.
    ///
    /// Returns `Ok(None)` when the id is unknown; a missing task is not
    /// an error here.
    fn find(&self, id: &str) -> Result<Option<Task>>;

    /// Creates a task from the request and persists it.
    ///
    /// Assigns a fresh UUID and, unless the request carries an override,
    /// the current time as `created_at`.
    fn create(&self, request: CreateTaskRequest) -> Result<Task>;

    /// Applies a partial update to an existing task.
    ///
    /// Returns the updated record, or `KanriError::NotFound` when the id
    /// does not exist. Storage is left untouched on failure.
    fn update(&self, id: &str, patch: UpdateTaskRequest) -> Result<Task>;

    /// Deletes a task by id.
    ///
    /// Deleting an id that does not exist is not an error.
    fn remove(&self, id: &str) -> Result<()>;

    /// Moves a task to another board column.
    ///
    /// Equivalent to an update that only sets `status`.
    fn move_to(&self, id: &str, status: TaskStatus) -> Result<Task> {
        self.update(id, UpdateTaskRequest::status_only(status))
    }

    /// Deletes every task.
    fn reset(&self) -> Result<()>;
}
