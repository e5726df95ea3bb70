//! Column grouping for the kanban board.

use super::model::{Task, TaskStatus};

/// A task list split into the three fixed board columns.
///
/// Incoming order is preserved within each column, so feeding in a
/// newest-first list keeps every column newest-first.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub scheduled: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl Board {
    /// Partitions a task list into columns by status.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut board = Board::default();
        for task in tasks {
            match task.status {
                TaskStatus::Scheduled => board.scheduled.push(task),
                TaskStatus::InProgress => board.in_progress.push(task),
                TaskStatus::Done => board.done.push(task),
            }
        }
        board
    }

    /// The tasks in one column.
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Scheduled => &self.scheduled,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Total number of tasks across all columns.
    pub fn len(&self) -> usize {
        self.scheduled.len() + self.in_progress.len() + self.done.len()
    }

    /// True when every column is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
