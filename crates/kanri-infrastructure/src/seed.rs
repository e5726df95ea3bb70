//! Fixed sample dataset for first-run seeding.

use chrono::{Duration, Utc};

use kanri_core::task::{Task, TaskPriority, TaskStatus};

/// The tasks written into an empty, unseeded store.
///
/// Covers all three columns so the first-run board is not empty.
/// Timestamps are staggered by whole days so the newest-first ordering
/// is stable regardless of when seeding runs.
pub fn sample_tasks() -> Vec<Task> {
    let now = Utc::now();

    vec![
        Task {
            id: "c56a4180-65aa-42ec-a945-5fd21dec0538".to_string(),
            title: "Set up the project skeleton".to_string(),
            description: Some("Repository layout, storage directory, sample data".to_string()),
            status: TaskStatus::Done,
            assignee: Some("mai".to_string()),
            tags: vec!["setup".to_string()],
            created_at: now - Duration::days(4),
            priority: Some(TaskPriority::High),
        },
        Task {
            id: "16fd2706-8baf-433b-82eb-8c7fada847da".to_string(),
            title: "Card create and edit forms".to_string(),
            description: Some("Title, description, assignee, tags, priority".to_string()),
            status: TaskStatus::Done,
            assignee: Some("ken".to_string()),
            tags: vec!["form".to_string(), "crud".to_string()],
            created_at: now - Duration::days(3),
            priority: Some(TaskPriority::Medium),
        },
        Task {
            id: "6ecd8c99-4036-403d-bf84-cf8400f67836".to_string(),
            title: "Drag cards between columns".to_string(),
            description: None,
            status: TaskStatus::InProgress,
            assignee: Some("mai".to_string()),
            tags: vec!["dnd".to_string(), "ux".to_string()],
            created_at: now - Duration::days(2),
            priority: Some(TaskPriority::High),
        },
        Task {
            id: "3f333df6-90a4-4fda-8dd3-9485d27cee36".to_string(),
            title: "Filter by assignee and tag".to_string(),
            description: Some("Search box plus dropdown filters above the board".to_string()),
            status: TaskStatus::Scheduled,
            assignee: None,
            tags: vec!["filters".to_string(), "ui".to_string()],
            created_at: now - Duration::days(1),
            priority: Some(TaskPriority::Low),
        },
    ]
}
