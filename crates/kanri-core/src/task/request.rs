//! Task creation and update request models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Task, TaskPriority, TaskStatus};

/// Request to create a new task.
///
/// The id is never caller-provided. `created_at` may be supplied when
/// importing existing records and defaults to the current time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Display title (required)
    pub title: String,

    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Initial board column
    pub status: TaskStatus,

    /// Optional assignee label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Free-form labels; defaults to empty when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Optional priority level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    /// Creation timestamp override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Validate the request and return errors if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required and cannot be empty".to_string());
        }

        Ok(())
    }

    /// Convert this request into a Task, always generating a new UUID.
    pub fn into_task(self) -> Task {
        Task {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            status: self.status,
            assignee: self.assignee,
            tags: self.tags.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
            priority: self.priority,
        }
    }
}

/// Partial update over the mutable fields of a task.
///
/// `id` and `created_at` are deliberately absent: an update can never touch
/// them. A field left as `None` keeps its current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New board column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New assignee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Replacement tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl UpdateTaskRequest {
    /// A patch that only moves the task to another column.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Merge this patch into an existing task, field by field.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assignee) = self.assignee {
            task.assignee = Some(assignee);
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        if let Some(priority) = self.priority {
            task.priority = Some(priority);
        }
    }
}
