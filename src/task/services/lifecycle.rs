//! Service layer for form-triggered task operations.
//!
//! The kanban board has its own orchestration in
//! [`crate::kanban::KanbanReconciler`]; this service covers the task form,
//! the agenda list, and the dashboard counts. Both go through the same
//! domain rules, so a status change behaves identically whether it came
//! from a drag or a form submit.

use crate::project::ProjectId;
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskEdit, TaskId, TaskStatus, UrgencyWindow},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Holds a dependency-injected store handle and clock; one instance per
/// project session, never a process-wide singleton.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Lists a project's tasks in the store's order (creation descending).
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the listing fails.
    pub async fn tasks(&self, project_id: ProjectId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.store.list(project_id).await?)
    }

    /// Creates a task from a form submission.
    ///
    /// The store assigns the identifier and timestamps and returns the
    /// persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when persistence fails.
    pub async fn create(&self, new_task: NewTask) -> TaskLifecycleResult<Task> {
        Ok(self.store.create(new_task).await?)
    }

    /// Changes a task's status, applying completion-date bookkeeping.
    ///
    /// Takes the caller's current record, plans the transition, and persists
    /// the delta. Requesting the status the task already has skips the store
    /// round trip and returns the record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the task no longer exists
    /// or persistence fails. The caller's record is untouched on failure.
    pub async fn change_status(
        &self,
        task: &Task,
        new_status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let delta = task.plan_transition(new_status, &*self.clock);
        if delta.is_noop() {
            return Ok(task.clone());
        }
        Ok(self.store.update(task.id(), &delta).await?)
    }

    /// Applies detail edits (title, description, assignee, due date).
    ///
    /// Edits never touch the status or the completion date. An empty edit
    /// returns the stored record without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the task no longer exists
    /// or persistence fails.
    pub async fn edit(&self, task: &Task, edit: TaskEdit) -> TaskLifecycleResult<Task> {
        let delta = edit.into_delta(self.clock.utc());
        if delta.is_noop() {
            return Ok(task.clone());
        }
        Ok(self.store.update(task.id(), &delta).await?)
    }

    /// Deletes a task after explicit user confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the task was already
    /// removed or persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.store.delete(id).await?)
    }

    /// Returns the project's urgent tasks under the given window.
    ///
    /// Source for the dashboard urgent count (three-day window) and the
    /// agenda highlight (seven-day window).
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the listing fails.
    pub async fn urgent_tasks(
        &self,
        project_id: ProjectId,
        window: UrgencyWindow,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let now = self.clock.utc();
        let tasks = self.store.list(project_id).await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.is_urgent(now, window))
            .collect())
    }
}
