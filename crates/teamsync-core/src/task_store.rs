//! Task Store
//!
//! Holds the board's tasks in fixture order. Status is the only mutable
//! field and any status may move to any other, including itself.

use crate::error::DashboardError;
use crate::types::{Task, TaskId, TaskStatus};

/// Outcome of a successful move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMove {
    /// Moved task ID
    pub task_id: TaskId,
    /// Task title at the time of the move
    pub title: String,
    /// Status before the move
    pub from: TaskStatus,
    /// Status after the move
    pub to: TaskStatus,
}

impl TaskMove {
    /// Whether the status actually changed
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// `"<title> → <label>"`
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} → {}", self.title, self.to.label())
    }
}

/// Ordered collection of tasks
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create store from seed tasks
    #[inline]
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Move a task to `status`, leaving every other field unchanged
    ///
    /// # Errors
    /// `DashboardError::TaskNotFound` if no task has this id; the store is
    /// left unchanged.
    pub fn move_task(&mut self, task_id: &TaskId, status: TaskStatus) -> Result<TaskMove, DashboardError> {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == task_id) else {
            tracing::debug!("Move ignored, unknown task {}", task_id);
            return Err(DashboardError::TaskNotFound(task_id.clone()));
        };

        let from = task.status;
        task.status = status;
        tracing::debug!("Task {} moved {:?} -> {:?}", task_id, from, status);

        Ok(TaskMove {
            task_id: task_id.clone(),
            title: task.title.clone(),
            from,
            to: status,
        })
    }

    /// Look up a task
    #[inline]
    #[must_use]
    pub fn get(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }

    /// Whether a task exists
    #[inline]
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.get(task_id).is_some()
    }

    /// All tasks in fixture order
    #[inline]
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks in one board column, fixture order preserved
    pub fn by_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    /// Number of tasks in one column
    #[must_use]
    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.by_status(status).count()
    }

    /// Task titles in fixture order
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.title.as_str()).collect()
    }

    /// Number of tasks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
