//! Task domain model.
//!
//! A task is a single card on the kanban board. Tasks live in one of three
//! fixed columns and are persisted as a single JSON collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The board column a task currently sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Planned but not started.
    Scheduled,
    /// Currently being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub fn all() -> [TaskStatus; 3] {
        [
            TaskStatus::Scheduled,
            TaskStatus::InProgress,
            TaskStatus::Done,
        ]
    }

    /// The serialized form (`scheduled`, `in-progress`, `done`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Scheduled => "scheduled",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human-readable column heading.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority level of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// The serialized form (`high`, `medium`, `low`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single card on the kanban board.
///
/// `id` and `created_at` are assigned at creation and never change
/// afterwards; every other field can be rewritten by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Display title
    pub title: String,
    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Board column the task sits in
    pub status: TaskStatus,
    /// Optional assignee label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Free-form labels; records written by older versions may omit this
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp (the sole sort key, newest first)
    pub created_at: DateTime<Utc>,
    /// Optional priority level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        Task {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            title: "Write docs".to_string(),
            description: Some("Cover the basics".to_string()),
            status: TaskStatus::InProgress,
            assignee: Some("mai".to_string()),
            tags: vec!["docs".to_string(), "ux".to_string()],
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            priority: Some(TaskPriority::High),
        }
    }

    #[test]
    fn test_serialize_uses_camel_case_and_wire_strings() {
        let json = serde_json::to_value(sample_task()).unwrap();

        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["createdAt"], "2024-01-15T09:30:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_optional_fields_are_omitted_when_absent() {
        let mut task = sample_task();
        task.description = None;
        task.assignee = None;
        task.priority = None;

        let json = serde_json::to_value(task).unwrap();

        assert!(json.get("description").is_none());
        assert!(json.get("assignee").is_none());
        assert!(json.get("priority").is_none());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // Records written before tags existed carry neither tags nor the
        // optional fields.
        let json = r#"{
            "id": "t-1",
            "title": "Old record",
            "status": "scheduled",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, "t-1");
        assert_eq!(task.status, TaskStatus::Scheduled);
        assert!(task.tags.is_empty());
        assert!(task.description.is_none());
        assert!(task.priority.is_none());
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(back, task);
    }

    #[test]
    fn test_status_wire_strings_and_labels() {
        let statuses = TaskStatus::all();
        assert_eq!(statuses.len(), 3);

        assert_eq!(TaskStatus::Scheduled.as_str(), "scheduled");
        assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TaskStatus::Done.as_str(), "done");

        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(TaskStatus::Done.to_string(), "done");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{
            "id": "t-2",
            "title": "Bad status",
            "status": "archived",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
