//! Board layout and column partitioning.

use crate::task::domain::{Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A `(status, title)` column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    status: TaskStatus,
    title: String,
}

impl BoardColumn {
    /// Creates a column for a status with a display title.
    #[must_use]
    pub fn new(status: TaskStatus, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
        }
    }

    /// Returns the status this column displays.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Ordered column definitions plus column-visibility policy.
///
/// The default board shows To Do, In Progress, Waiting, and Done, with the
/// Canceled column hidden until explicitly toggled. `not_yet` tasks have no
/// column; they land in the backlog bucket rendered outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    columns: Vec<BoardColumn>,
    show_canceled: bool,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            columns: vec![
                BoardColumn::new(TaskStatus::ToDo, "To Do"),
                BoardColumn::new(TaskStatus::InProgress, "In Progress"),
                BoardColumn::new(TaskStatus::Waiting, "Waiting"),
                BoardColumn::new(TaskStatus::Done, "Done"),
                BoardColumn::new(TaskStatus::Canceled, "Canceled"),
            ],
            show_canceled: false,
        }
    }
}

impl BoardLayout {
    /// Creates the default five-column board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with custom columns.
    #[must_use]
    pub const fn with_columns(columns: Vec<BoardColumn>) -> Self {
        Self {
            columns,
            show_canceled: false,
        }
    }

    /// Returns all column definitions in display order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns whether the Canceled column is currently shown.
    #[must_use]
    pub const fn canceled_visible(&self) -> bool {
        self.show_canceled
    }

    /// Toggles visibility of the Canceled column.
    pub const fn set_canceled_visible(&mut self, visible: bool) {
        self.show_canceled = visible;
    }

    /// Partitions a task list into status-keyed columns plus the backlog.
    ///
    /// Deterministic given the same input order: insertion order within a
    /// column is preserved from the source list, with no implicit sorting.
    /// That keeps drag-and-drop positioning visually stable; it is not a
    /// due-date ordering guarantee. Every input task appears exactly once:
    /// in its status's column, or in the backlog when its status has no
    /// column. Hidden columns are still partitioned and carry a visibility
    /// flag for the rendering layer.
    #[must_use]
    pub fn partition(&self, tasks: &[Task]) -> BoardSnapshot {
        let mut buckets: HashMap<TaskStatus, Vec<Task>> = HashMap::new();
        let mut backlog = Vec::new();
        for task in tasks {
            if self.columns.iter().any(|c| c.status() == task.status()) {
                buckets.entry(task.status()).or_default().push(task.clone());
            } else {
                backlog.push(task.clone());
            }
        }

        let columns = self
            .columns
            .iter()
            .map(|column| ColumnView {
                status: column.status(),
                title: column.title().to_owned(),
                visible: column.status() != TaskStatus::Canceled || self.show_canceled,
                tasks: buckets.remove(&column.status()).unwrap_or_default(),
            })
            .collect();

        BoardSnapshot { columns, backlog }
    }
}

/// One rendered column: definition plus its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    status: TaskStatus,
    title: String,
    visible: bool,
    tasks: Vec<Task>,
}

impl ColumnView {
    /// Returns the status this column displays.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the rendering layer should draw this column.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Returns the column's tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Point-in-time view of the board: the columns and the backlog bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    columns: Vec<ColumnView>,
    backlog: Vec<Task>,
}

impl BoardSnapshot {
    /// Returns the columns in display order, hidden ones included.
    #[must_use]
    pub fn columns(&self) -> &[ColumnView] {
        &self.columns
    }

    /// Returns the column for a status, if the layout defines one.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.status() == status)
    }

    /// Returns the off-board bucket (`not_yet` tasks).
    #[must_use]
    pub fn backlog(&self) -> &[Task] {
        &self.backlog
    }

    /// Returns the total number of tasks across columns and backlog.
    #[must_use]
    pub fn task_count(&self) -> usize {
        let in_columns: usize = self.columns.iter().map(|c| c.tasks().len()).sum();
        in_columns + self.backlog.len()
    }
}
