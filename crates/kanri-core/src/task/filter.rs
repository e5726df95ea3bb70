//! Task list filtering.

use serde::{Deserialize, Serialize};

use super::model::Task;

/// Criteria for narrowing down a task list.
///
/// All criteria are optional and combined with AND. An unset or empty
/// criterion matches every task, so the default filter passes everything
/// through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Case-insensitive substring match over title and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact assignee match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Tag membership
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl TaskFilter {
    /// Whether a single task passes all criteria.
    pub fn matches(&self, task: &Task) -> bool {
        let search_ok = match &self.search {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                task.title.to_lowercase().contains(&query)
                    || task
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            }
            _ => true,
        };

        let assignee_ok = match &self.assignee {
            Some(assignee) if !assignee.is_empty() => {
                task.assignee.as_deref() == Some(assignee.as_str())
            }
            _ => true,
        };

        let tag_ok = match &self.tag {
            Some(tag) if !tag.is_empty() => task.tags.iter().any(|t| t == tag),
            _ => true,
        };

        search_ok && assignee_ok && tag_ok
    }

    /// Filters a task list, preserving order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

/// Distinct non-empty assignees in first-seen order.
///
/// Used to populate the assignee filter dropdown.
pub fn assignee_options(tasks: &[Task]) -> Vec<String> {
    let mut options = Vec::new();
    for task in tasks {
        if let Some(assignee) = &task.assignee {
            if !assignee.is_empty() && !options.contains(assignee) {
                options.push(assignee.clone());
            }
        }
    }
    options
}

/// Distinct non-empty tags in first-seen order.
pub fn tag_options(tasks: &[Task]) -> Vec<String> {
    let mut options = Vec::new();
    for task in tasks {
        for tag in &task.tags {
            if !tag.is_empty() && !options.contains(tag) {
                options.push(tag.clone());
            }
        }
    }
    options
}
