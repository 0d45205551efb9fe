//! In-memory task store for tests and demo wiring.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::ProjectId;
use crate::task::{
    domain::{NewTask, Task, TaskDelta, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Keeps an explicit per-project ordering index so that [`TaskStore::list`]
/// honours the creation-time-descending contract even when the clock hands
/// out identical timestamps.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore<C> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    // Most recently created first, per project.
    project_index: HashMap<ProjectId, Vec<TaskId>>,
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory store using the given clock for
    /// store-assigned timestamps.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self, project_id: ProjectId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let tasks = state
            .project_index
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let task = Task::from_new(new_task, &*self.clock);
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .project_index
            .entry(task.project_id())
            .or_default()
            .insert(0, task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, delta: &TaskDelta) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.apply_delta(delta);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let task = state.tasks.remove(&id).ok_or(TaskStoreError::NotFound(id))?;
        if let Some(ids) = state.project_index.get_mut(&task.project_id()) {
            ids.retain(|task_id| *task_id != id);
        }
        Ok(())
    }
}
