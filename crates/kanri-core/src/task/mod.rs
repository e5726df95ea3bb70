//! Task domain models, requests, and the repository trait.
//!
//! Tasks are the cards on the kanban board, grouped into three fixed
//! status columns and persisted as one JSON collection.

mod board;
mod filter;
mod model;
mod repository;
mod request;

pub use board::Board;
pub use filter::{TaskFilter, assignee_options, tag_options};
pub use model::{Task, TaskPriority, TaskStatus};
pub use repository::TaskRepository;
pub use request::{CreateTaskRequest, UpdateTaskRequest};
