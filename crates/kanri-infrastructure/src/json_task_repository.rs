//! File-backed task repository.
//!
//! Implements `TaskRepository` over a `TaskStore`: every operation loads
//! the whole collection, mutates it in memory, and writes it back. There
//! is no locking; concurrent writers race and the last write wins.

use kanri_core::error::{KanriError, Result};
use kanri_core::task::{CreateTaskRequest, Task, TaskRepository, UpdateTaskRequest};

use crate::task_store::TaskStore;

/// Task repository persisting to a single JSON collection file.
pub struct JsonTaskRepository {
    store: TaskStore,
}

impl JsonTaskRepository {
    /// Creates a repository over the given store.
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }
}

impl TaskRepository for JsonTaskRepository {
    fn list(&self) -> Result<Vec<Task>> {
        let mut tasks = self.store.load();
        // Newest first; id as the secondary key keeps the order total.
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(tasks)
    }

    fn find(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.store.load().into_iter().find(|t| t.id == id))
    }

    fn create(&self, request: CreateTaskRequest) -> Result<Task> {
        let task = request.into_task();

        let mut all = self.store.load();
        all.push(task.clone());
        self.store.save(&all)?;

        Ok(task)
    }

    fn update(&self, id: &str, patch: UpdateTaskRequest) -> Result<Task> {
        let mut all = self.store.load();

        let Some(task) = all.iter_mut().find(|t| t.id == id) else {
            return Err(KanriError::not_found("task", id));
        };

        patch.apply(task);
        let updated = task.clone();
        self.store.save(&all)?;

        Ok(updated)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let mut all = self.store.load();
        all.retain(|t| t.id != id);
        self.store.save(&all)
    }

    fn reset(&self) -> Result<()> {
        self.store.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use kanri_core::task::TaskStatus;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn repository(temp_dir: &TempDir) -> JsonTaskRepository {
        JsonTaskRepository::new(TaskStore::new(temp_dir.path()))
    }

    fn create_request(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: None,
            status: TaskStatus::Scheduled,
            assignee: None,
            tags: None,
            priority: None,
            created_at: None,
        }
    }

    #[test]
    fn test_create_assigns_uuid_and_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let task = repo.create(create_request("Write spec")).unwrap();

        assert!(Uuid::parse_str(&task.id).is_ok());
        assert!(task.tags.is_empty());

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Write spec");
        assert_eq!(listed[0].status, TaskStatus::Scheduled);
    }

    #[test]
    fn test_created_ids_are_unique() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let a = repo.create(create_request("First")).unwrap();
        let b = repo.create(create_request("Second")).unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_orders_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();

        let mut older = create_request("T1");
        older.created_at = Some(t0);
        let older = repo.create(older).unwrap();

        let mut newer = create_request("T2");
        newer.created_at = Some(t0 + Duration::seconds(1));
        let newer = repo.create(newer).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);
    }

    #[test]
    fn test_list_breaks_timestamp_ties_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        for title in ["A", "B", "C"] {
            let mut request = create_request(title);
            request.created_at = Some(at);
            repo.create(request).unwrap();
        }

        let listed = repo.list().unwrap();
        let mut ids: Vec<String> = listed.iter().map(|t| t.id.clone()).collect();
        ids.sort();

        // Same timestamp everywhere, so the listing must be id-ascending.
        assert_eq!(
            listed.iter().map(|t| t.id.clone()).collect::<Vec<_>>(),
            ids
        );
    }

    #[test]
    fn test_find_missing_id_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.create(create_request("Present")).unwrap();

        assert!(repo.find("missing-id").unwrap().is_none());
    }

    #[test]
    fn test_update_merges_patch_and_keeps_identity() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let created = repo.create(create_request("Original")).unwrap();

        let patch = UpdateTaskRequest {
            title: Some("Renamed".to_string()),
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };
        let updated = repo.update(&created.id, patch).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.status, TaskStatus::InProgress);

        // The change is persisted.
        let found = repo.find(&created.id).unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[test]
    fn test_update_missing_id_fails_and_leaves_storage_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let created = repo.create(create_request("Only task")).unwrap();

        let err = repo
            .update("missing-id", UpdateTaskRequest::status_only(TaskStatus::Done))
            .unwrap_err();
        assert!(err.is_not_found());

        let listed = repo.list().unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let created = repo.create(create_request("Doomed")).unwrap();

        repo.remove(&created.id).unwrap();
        assert!(repo.find(&created.id).unwrap().is_none());

        // Second removal of the same id is not an error.
        repo.remove(&created.id).unwrap();
    }

    #[test]
    fn test_move_to_equals_status_only_update() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let created = repo.create(create_request("Moved")).unwrap();

        let moved = repo.move_to(&created.id, TaskStatus::Done).unwrap();

        // Only the column changed; everything else is the created record.
        let mut expected = created;
        expected.status = TaskStatus::Done;
        assert_eq!(moved, expected);
        assert_eq!(repo.find(&moved.id).unwrap(), Some(expected));
    }

    #[test]
    fn test_reset_clears_everything() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.create(create_request("One")).unwrap();
        repo.create(create_request("Two")).unwrap();

        repo.reset().unwrap();

        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_reset_does_not_reopen_seeding() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.store().seed_if_empty().unwrap();
        assert!(!repo.list().unwrap().is_empty());

        repo.reset().unwrap();
        repo.store().seed_if_empty().unwrap();

        // The seed marker outlives a reset; sample data never comes back.
        assert!(repo.list().unwrap().is_empty());
    }
}
