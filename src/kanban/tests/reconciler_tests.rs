//! Reconciliation tests: optimistic updates, rollback, and store traffic.

use std::sync::Arc;

use crate::kanban::{DropEvent, DropOutcome, DropSlot, KanbanError, KanbanReconciler};
use crate::project::ProjectId;
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{NewTask, Task, TaskDelta, TaskId, TaskStatus, TaskTitle},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use mockable::DefaultClock;
use rstest::rstest;

mockall::mock! {
    Store {}

    #[async_trait::async_trait]
    impl TaskStore for Store {
        async fn list(&self, project_id: ProjectId) -> TaskStoreResult<Vec<Task>>;
        async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task>;
        async fn update(&self, id: TaskId, delta: &TaskDelta) -> TaskStoreResult<Task>;
        async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;
    }
}

type MemoryReconciler = KanbanReconciler<InMemoryTaskStore<DefaultClock>, DefaultClock>;

fn memory_reconciler() -> MemoryReconciler {
    let clock = Arc::new(DefaultClock);
    let store = Arc::new(InMemoryTaskStore::new(Arc::clone(&clock)));
    KanbanReconciler::new(ProjectId::new(), store, clock)
}

fn new_task(project_id: ProjectId, title: &str, status: TaskStatus) -> NewTask {
    NewTask::new(project_id, TaskTitle::new(title).expect("valid title")).with_status(status)
}

fn seeded_task(project_id: ProjectId, title: &str, status: TaskStatus) -> Task {
    Task::from_new(new_task(project_id, title, status), &DefaultClock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_to_done_sets_completion_and_moves_the_card() {
    let mut reconciler = memory_reconciler();
    let project_id = reconciler.project_id();
    let task = reconciler
        .request_create(new_task(project_id, "Fit the windows", TaskStatus::ToDo))
        .await
        .expect("creation should succeed");

    let outcome = reconciler
        .handle_drop(DropEvent::new(
            task.id(),
            DropSlot::new(TaskStatus::ToDo, 0),
            Some(DropSlot::new(TaskStatus::Done, 0)),
        ))
        .await
        .expect("drop should succeed");

    assert!(outcome.transition().is_some());

    let snapshot = reconciler.snapshot();
    let done = snapshot
        .column(TaskStatus::Done)
        .expect("done column exists");
    assert_eq!(done.tasks().len(), 1);
    let moved = done.tasks().first().expect("moved card present");
    assert_eq!(moved.id(), task.id());
    assert_eq!(moved.status(), TaskStatus::Done);
    assert!(moved.completion_date().is_some());
    assert!(
        snapshot
            .column(TaskStatus::ToDo)
            .expect("to_do column exists")
            .tasks()
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_out_of_done_clears_completion() {
    let mut reconciler = memory_reconciler();
    let project_id = reconciler.project_id();
    let task = reconciler
        .request_create(new_task(project_id, "Snag list", TaskStatus::ToDo))
        .await
        .expect("creation should succeed");
    reconciler
        .request_status_change(task.id(), TaskStatus::Done)
        .await
        .expect("completion should succeed");

    reconciler
        .request_status_change(task.id(), TaskStatus::InProgress)
        .await
        .expect("reopening should succeed");

    let snapshot = reconciler.snapshot();
    let reopened = snapshot
        .column(TaskStatus::InProgress)
        .and_then(|c| c.tasks().first().cloned())
        .expect("card back in progress");
    assert!(reopened.completion_date().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn noop_drops_touch_neither_board_nor_store() {
    let mut reconciler = memory_reconciler();
    let project_id = reconciler.project_id();
    let task = reconciler
        .request_create(new_task(project_id, "Stationary", TaskStatus::Waiting))
        .await
        .expect("creation should succeed");
    let before = reconciler.snapshot();

    let same_slot = DropSlot::new(TaskStatus::Waiting, 0);
    let outside = reconciler
        .handle_drop(DropEvent::new(task.id(), same_slot, None))
        .await
        .expect("outside drop is accepted");
    let unchanged = reconciler
        .handle_drop(DropEvent::new(task.id(), same_slot, Some(same_slot)))
        .await
        .expect("same-slot drop is accepted");
    let reorder = reconciler
        .handle_drop(DropEvent::new(
            task.id(),
            same_slot,
            Some(DropSlot::new(TaskStatus::Waiting, 4)),
        ))
        .await
        .expect("reorder drop is accepted");

    assert_eq!(outside, DropOutcome::OutsideBoard);
    assert_eq!(unchanged, DropOutcome::SameSlot);
    assert_eq!(reorder, DropOutcome::ReorderOnly);
    assert_eq!(reconciler.snapshot(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persistence_failure_rolls_the_board_back() {
    let project_id = ProjectId::new();
    let task = seeded_task(project_id, "Fragile move", TaskStatus::ToDo);
    let task_id = task.id();

    let mut store = MockStore::new();
    let listed = vec![task];
    store
        .expect_list()
        .returning(move |_| Ok(listed.clone()));
    store.expect_update().returning(|_, _| {
        Err(TaskStoreError::persistence(std::io::Error::other(
            "service outage",
        )))
    });

    let mut reconciler = KanbanReconciler::new(project_id, Arc::new(store), Arc::new(DefaultClock));
    reconciler.refresh().await.expect("refresh should succeed");
    let before = reconciler.snapshot();

    let result = reconciler
        .handle_drop(DropEvent::new(
            task_id,
            DropSlot::new(TaskStatus::ToDo, 0),
            Some(DropSlot::new(TaskStatus::Done, 0)),
        ))
        .await;

    assert!(matches!(
        result,
        Err(KanbanError::TransitionFailed {
            task_id: failed_id,
            requested: TaskStatus::Done,
            source: TaskStoreError::Persistence(_),
        }) if failed_id == task_id
    ));
    // The column partition shown to the user matches the pre-drag state.
    assert_eq!(reconciler.snapshot(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn noop_status_requests_never_reach_the_store() {
    let project_id = ProjectId::new();
    let task = seeded_task(project_id, "Already waiting", TaskStatus::Waiting);
    let task_id = task.id();

    let mut store = MockStore::new();
    let listed = vec![task];
    store
        .expect_list()
        .returning(move |_| Ok(listed.clone()));
    store.expect_update().never();

    let mut reconciler = KanbanReconciler::new(project_id, Arc::new(store), Arc::new(DefaultClock));
    reconciler.refresh().await.expect("refresh should succeed");

    reconciler
        .request_status_change(task_id, TaskStatus::Waiting)
        .await
        .expect("no-op request should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_tasks_are_rejected_before_any_store_call() {
    let mut store = MockStore::new();
    store.expect_update().never();
    let mut reconciler =
        KanbanReconciler::new(ProjectId::new(), Arc::new(store), Arc::new(DefaultClock));

    let stranger = TaskId::new();
    let result = reconciler
        .request_status_change(stranger, TaskStatus::Done)
        .await;

    assert!(matches!(
        result,
        Err(KanbanError::UnknownTask(id)) if id == stranger
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_are_prepended_to_match_store_order() {
    let mut reconciler = memory_reconciler();
    let project_id = reconciler.project_id();

    reconciler
        .request_create(new_task(project_id, "first", TaskStatus::ToDo))
        .await
        .expect("creation should succeed");
    reconciler
        .request_create(new_task(project_id, "second", TaskStatus::ToDo))
        .await
        .expect("creation should succeed");

    let local: Vec<&str> = reconciler
        .tasks()
        .iter()
        .map(|t| t.title().as_str())
        .collect();
    assert_eq!(local, vec!["second", "first"]);

    // A refresh must not reshuffle what the board already shows.
    let before = reconciler.snapshot();
    reconciler.refresh().await.expect("refresh should succeed");
    assert_eq!(reconciler.snapshot(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_removes_the_card_from_the_board() {
    let mut reconciler = memory_reconciler();
    let project_id = reconciler.project_id();
    let task = reconciler
        .request_create(new_task(project_id, "Doomed", TaskStatus::ToDo))
        .await
        .expect("creation should succeed");

    reconciler
        .request_delete(task.id())
        .await
        .expect("delete should succeed");

    assert!(reconciler.tasks().is_empty());
    let again = reconciler.request_delete(task.id()).await;
    assert!(matches!(
        again,
        Err(KanbanError::Store(TaskStoreError::NotFound(_)))
    ));
}
