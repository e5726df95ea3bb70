pub mod json_task_repository;
pub mod paths;
pub mod seed;
pub mod task_store;

pub use crate::json_task_repository::JsonTaskRepository;
pub use crate::task_store::TaskStore;
