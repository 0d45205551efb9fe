//! Optimistic board state reconciliation against the task store.

use crate::kanban::board::{BoardLayout, BoardSnapshot};
use crate::kanban::drop::{DropEvent, DropOutcome};
use crate::project::ProjectId;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the reconciler to the presentation layer.
///
/// Store failures are wrapped with enough context (which task, which
/// requested transition) for the view to build a user-facing message; the
/// underlying failure kind is preserved unchanged in `source`.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// The task is not present in the local list; the view should refresh.
    #[error("task not in board state: {0}")]
    UnknownTask(TaskId),

    /// A status change failed to persist. The local board state has already
    /// been rolled back to its pre-request snapshot when this is returned.
    #[error("status change to {requested} failed for task {task_id}")]
    TransitionFailed {
        /// The task whose transition failed.
        task_id: TaskId,
        /// The status that was requested.
        requested: TaskStatus,
        /// The store failure, unchanged in kind.
        #[source]
        source: TaskStoreError,
    },

    /// A non-transition store operation (refresh, create, delete) failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for reconciler operations.
pub type KanbanResult<T> = Result<T, KanbanError>;

/// Maps a flat task list into status-keyed columns and reconciles
/// optimistic updates against the persistence result.
///
/// Holds the project-scoped local task list that drives the rendered
/// columns. State is per instance with an injected store handle; the
/// original module-level mutable task array is deliberately not
/// reproduced. Concurrency model: one logical writer (the user, via
/// sequential UI events); the last resolved write wins on local state, and
/// in-flight updates are never cancelled.
pub struct KanbanReconciler<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    project_id: ProjectId,
    store: Arc<S>,
    clock: Arc<C>,
    board: BoardLayout,
    tasks: Vec<Task>,
}

impl<S, C> KanbanReconciler<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a reconciler for a project with the default board layout.
    ///
    /// The local list starts empty; call [`refresh`](Self::refresh) to load
    /// it from the store.
    #[must_use]
    pub fn new(project_id: ProjectId, store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            project_id,
            store,
            clock,
            board: BoardLayout::default(),
            tasks: Vec::new(),
        }
    }

    /// Replaces the board layout.
    #[must_use]
    pub fn with_board(mut self, board: BoardLayout) -> Self {
        self.board = board;
        self
    }

    /// Returns the project this board belongs to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the board layout.
    #[must_use]
    pub const fn board(&self) -> &BoardLayout {
        &self.board
    }

    /// Toggles visibility of the Canceled column.
    pub const fn set_canceled_visible(&mut self, visible: bool) {
        self.board.set_canceled_visible(visible);
    }

    /// Returns the local task list in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Reloads the local list from the store.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when the listing fails; the previous
    /// local list is kept in that case.
    pub async fn refresh(&mut self) -> KanbanResult<()> {
        let tasks = self.store.list(self.project_id).await?;
        self.tasks = tasks;
        Ok(())
    }

    /// Returns the current column partition for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.partition(&self.tasks)
    }

    /// Handles a completed drag gesture.
    ///
    /// No-op outcomes (released outside the board, same slot, same-column
    /// reorder) return without touching the store. A cross-column drop runs
    /// the optimistic status-change protocol.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::TransitionFailed`] when persistence fails;
    /// the board state has been rolled back when that happens.
    pub async fn handle_drop(&mut self, event: DropEvent) -> KanbanResult<DropOutcome> {
        let outcome = event.interpret();
        if let DropOutcome::Transition(request) = outcome {
            self.request_status_change(request.task_id, request.new_status)
                .await?;
        }
        Ok(outcome)
    }

    /// Moves a task to a new status with optimistic local application.
    ///
    /// Two-phase protocol: apply the planned delta to the local record,
    /// await the store, then confirm with the post-write record or roll the
    /// local record back to its pre-request state. Requesting the status
    /// the task already has is a valid no-op that skips the store entirely.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::UnknownTask`] when the task is not in the
    /// local list, or [`KanbanError::TransitionFailed`] when persistence
    /// fails (after rollback).
    pub async fn request_status_change(
        &mut self,
        task_id: TaskId,
        new_status: TaskStatus,
    ) -> KanbanResult<()> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or(KanbanError::UnknownTask(task_id))?;
        let Some(snapshot) = self.tasks.get(position).cloned() else {
            return Err(KanbanError::UnknownTask(task_id));
        };

        let delta = snapshot.plan_transition(new_status, &*self.clock);
        if delta.is_noop() {
            return Ok(());
        }

        if let Some(task) = self.tasks.get_mut(position) {
            task.apply_delta(&delta);
        }

        match self.store.update(task_id, &delta).await {
            Ok(persisted) => {
                if let Some(task) = self.tasks.get_mut(position) {
                    *task = persisted;
                }
                Ok(())
            }
            Err(source) => {
                if let Some(task) = self.tasks.get_mut(position) {
                    *task = snapshot;
                }
                Err(KanbanError::TransitionFailed {
                    task_id,
                    requested: new_status,
                    source,
                })
            }
        }
    }

    /// Creates a task and prepends it to the local list.
    ///
    /// Prepending matches the store's creation-time-descending list order,
    /// so the next refresh does not reshuffle the board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when persistence fails; the local
    /// list is untouched in that case.
    pub async fn request_create(&mut self, new_task: NewTask) -> KanbanResult<Task> {
        let task = self.store.create(new_task).await?;
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Deletes a task and removes it from the local list.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when the task was already removed or
    /// persistence fails; the local list is untouched in that case.
    pub async fn request_delete(&mut self, task_id: TaskId) -> KanbanResult<()> {
        self.store.delete(task_id).await?;
        self.tasks.retain(|task| task.id() != task_id);
        Ok(())
    }
}
