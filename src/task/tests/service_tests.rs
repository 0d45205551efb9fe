//! Service orchestration tests against the in-memory store.

use std::sync::Arc;

use crate::project::ProjectId;
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{NewTask, TaskEdit, TaskId, TaskStatus, TaskTitle, UrgencyWindow},
    ports::TaskStoreError,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use chrono::Duration;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskStore<DefaultClock>, DefaultClock>;

#[fixture]
fn service() -> TestService {
    let clock = Arc::new(DefaultClock);
    TaskLifecycleService::new(Arc::new(InMemoryTaskStore::new(Arc::clone(&clock))), clock)
}

fn new_task(project_id: ProjectId, title: &str) -> NewTask {
    NewTask::new(project_id, TaskTitle::new(title).expect("valid title"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_listed(service: TestService) {
    let project_id = ProjectId::new();
    let created = service
        .create(new_task(project_id, "Pour the foundation").with_status(TaskStatus::ToDo))
        .await
        .expect("creation should succeed");

    let listed = service.tasks(project_id).await.expect("listing succeeds");

    assert_eq!(listed, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_returns_most_recently_created_first(service: TestService) {
    let project_id = ProjectId::new();
    for title in ["first", "second", "third"] {
        service
            .create(new_task(project_id, title))
            .await
            .expect("creation should succeed");
    }

    let listed = service.tasks(project_id).await.expect("listing succeeds");
    let titles: Vec<&str> = listed.iter().map(|t| t.title().as_str()).collect();

    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_scoped_to_the_project(service: TestService) {
    let mine = ProjectId::new();
    let theirs = ProjectId::new();
    service
        .create(new_task(mine, "Mine"))
        .await
        .expect("creation should succeed");
    service
        .create(new_task(theirs, "Theirs"))
        .await
        .expect("creation should succeed");

    let listed = service.tasks(mine).await.expect("listing succeeds");

    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|t| t.project_id() == mine));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_task_sets_the_completion_date(service: TestService) {
    let project_id = ProjectId::new();
    let task = service
        .create(new_task(project_id, "Fit the windows").with_status(TaskStatus::ToDo))
        .await
        .expect("creation should succeed");

    let completed = service
        .change_status(&task, TaskStatus::Done)
        .await
        .expect("status change should succeed");

    assert_eq!(completed.status(), TaskStatus::Done);
    assert!(completed.completion_date().is_some());

    let listed = service.tasks(project_id).await.expect("listing succeeds");
    assert_eq!(listed, vec![completed]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_a_done_task_clears_the_completion_date(service: TestService) {
    let project_id = ProjectId::new();
    let task = service
        .create(new_task(project_id, "Snag list").with_status(TaskStatus::ToDo))
        .await
        .expect("creation should succeed");
    let completed = service
        .change_status(&task, TaskStatus::Done)
        .await
        .expect("status change should succeed");

    let reopened = service
        .change_status(&completed, TaskStatus::InProgress)
        .await
        .expect("status change should succeed");

    assert_eq!(reopened.status(), TaskStatus::InProgress);
    assert!(reopened.completion_date().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requesting_the_current_status_skips_the_store(service: TestService) {
    let task = service
        .create(new_task(ProjectId::new(), "Idempotent").with_status(TaskStatus::Waiting))
        .await
        .expect("creation should succeed");

    let unchanged = service
        .change_status(&task, TaskStatus::Waiting)
        .await
        .expect("no-op change should succeed");

    assert_eq!(unchanged, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_apply_without_touching_status(service: TestService) {
    let task = service
        .create(new_task(ProjectId::new(), "Old title").with_status(TaskStatus::InProgress))
        .await
        .expect("creation should succeed");

    let edited = service
        .edit(
            &task,
            TaskEdit::new().with_title(TaskTitle::new("New title").expect("valid title")),
        )
        .await
        .expect("edit should succeed");

    assert_eq!(edited.title().as_str(), "New title");
    assert_eq!(edited.status(), TaskStatus::InProgress);
    assert!(edited.updated_at() >= task.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_reports_not_found(service: TestService) {
    let task = service
        .create(new_task(ProjectId::new(), "Short lived"))
        .await
        .expect("creation should succeed");

    service.delete(task.id()).await.expect("first delete succeeds");
    let result = service.delete(task.id()).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Store(TaskStoreError::NotFound(id))) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_a_missing_task_reports_not_found(service: TestService) {
    let task = service
        .create(new_task(ProjectId::new(), "Ghost"))
        .await
        .expect("creation should succeed");
    service.delete(task.id()).await.expect("delete succeeds");

    let result = service.change_status(&task, TaskStatus::Done).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Store(TaskStoreError::NotFound(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_accepts_unknown_ids_as_not_found(service: TestService) {
    let result = service.delete(TaskId::new()).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Store(TaskStoreError::NotFound(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn urgent_tasks_applies_the_window_and_skips_closed_statuses(service: TestService) {
    let project_id = ProjectId::new();
    let soon = DefaultClock.utc() + Duration::days(2);
    let later = DefaultClock.utc() + Duration::days(30);

    service
        .create(
            new_task(project_id, "Urgent open")
                .with_status(TaskStatus::ToDo)
                .with_due_date(soon),
        )
        .await
        .expect("creation should succeed");
    service
        .create(
            new_task(project_id, "Comfortably scheduled")
                .with_status(TaskStatus::ToDo)
                .with_due_date(later),
        )
        .await
        .expect("creation should succeed");
    let done = service
        .create(
            new_task(project_id, "Already done")
                .with_status(TaskStatus::ToDo)
                .with_due_date(soon),
        )
        .await
        .expect("creation should succeed");
    service
        .change_status(&done, TaskStatus::Done)
        .await
        .expect("status change should succeed");

    let urgent = service
        .urgent_tasks(project_id, UrgencyWindow::dashboard())
        .await
        .expect("urgency query succeeds");

    let titles: Vec<&str> = urgent.iter().map(|t| t.title().as_str()).collect();
    assert_eq!(titles, vec!["Urgent open"]);
}
