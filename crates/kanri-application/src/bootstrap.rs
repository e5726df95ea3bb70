//! Composition root wiring storage, repository, and service together.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use kanri_core::error::Result;
use kanri_core::task::TaskRepository;
use kanri_infrastructure::{JsonTaskRepository, TaskStore};

use crate::task_service::TaskService;

/// Builds a ready-to-use task service at the platform default location.
///
/// Creates the store directory if needed, runs the one-time seeding,
/// and wires the repository behind the default simulated network.
pub fn bootstrap() -> Result<TaskService> {
    let store = TaskStore::at_default_location()?;
    bootstrap_with_store(store)
}

/// Builds a task service over a store rooted at `base_dir`.
///
/// Behaves exactly like [`bootstrap`] but at an explicit location, for
/// tests and embedding.
pub fn bootstrap_at(base_dir: impl AsRef<Path>) -> Result<TaskService> {
    bootstrap_with_store(TaskStore::new(base_dir))
}

fn bootstrap_with_store(store: TaskStore) -> Result<TaskService> {
    store.seed_if_empty()?;

    info!(
        "[Bootstrap] Task store ready (available: {})",
        store.is_available()
    );

    let repository: Arc<dyn TaskRepository> = Arc::new(JsonTaskRepository::new(store));
    Ok(TaskService::new(repository))
}
