//! Store port for task persistence.

use crate::project::ProjectId;
use crate::task::domain::{NewTask, Task, TaskDelta, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Implementations are backed by the hosted data service in production and
/// by [`InMemoryTaskStore`](crate::task::adapters::memory::InMemoryTaskStore)
/// in tests. Stores never retry and never swallow failures; every error
/// reaches the caller.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists the tasks of a project, ordered by creation time descending.
    ///
    /// The ordering is the store's contract, not the domain's.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] on transport or storage
    /// failure.
    async fn list(&self, project_id: ProjectId) -> TaskStoreResult<Vec<Task>>;

    /// Persists a new task, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] on transport or storage
    /// failure.
    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task>;

    /// Applies a partial update and returns the post-write record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task no longer exists,
    /// or [`TaskStoreError::Persistence`] on transport or storage failure.
    async fn update(&self, id: TaskId, delta: &TaskDelta) -> TaskStoreResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task was already
    /// deleted, or [`TaskStoreError::Persistence`] on transport or storage
    /// failure.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The referenced task no longer exists. Recoverable: the view refreshes
    /// its list and informs the user the item was already removed.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Transport or storage failure. Recoverable by retry at the user's
    /// discretion; the core performs no automatic retry.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
