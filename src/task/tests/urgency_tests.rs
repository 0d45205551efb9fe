//! Unit tests for urgency classification.

use crate::project::ProjectId;
use crate::task::domain::{NewTask, Task, TaskStatus, TaskTitle, UrgencyWindow};
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn task_due_in(days: i64, status: TaskStatus, now: DateTime<Utc>) -> Task {
    let title = TaskTitle::new("Urgency test").expect("valid title");
    Task::from_new(
        NewTask::new(ProjectId::new(), title)
            .with_status(status)
            .with_due_date(now + Duration::days(days)),
        &DefaultClock,
    )
}

#[rstest]
fn due_in_two_days_is_urgent_under_both_windows(now: DateTime<Utc>) {
    let task = task_due_in(2, TaskStatus::ToDo, now);

    assert!(task.is_urgent(now, UrgencyWindow::dashboard()));
    assert!(task.is_urgent(now, UrgencyWindow::display()));
}

#[rstest]
fn due_in_five_days_is_urgent_only_under_the_display_window(now: DateTime<Utc>) {
    let task = task_due_in(5, TaskStatus::InProgress, now);

    assert!(!task.is_urgent(now, UrgencyWindow::dashboard()));
    assert!(task.is_urgent(now, UrgencyWindow::display()));
}

#[rstest]
fn due_beyond_the_display_window_is_not_urgent(now: DateTime<Utc>) {
    let task = task_due_in(10, TaskStatus::ToDo, now);

    assert!(!task.is_urgent(now, UrgencyWindow::display()));
}

#[rstest]
fn overdue_tasks_are_urgent_under_every_window(now: DateTime<Utc>) {
    let task = task_due_in(-3, TaskStatus::Waiting, now);

    assert!(task.is_urgent(now, UrgencyWindow::dashboard()));
    assert!(task.is_urgent(now, UrgencyWindow::display()));
}

#[rstest]
#[case(TaskStatus::Done)]
#[case(TaskStatus::Canceled)]
fn closed_tasks_are_never_urgent(#[case] status: TaskStatus, now: DateTime<Utc>) {
    let task = task_due_in(2, status, now);

    assert!(!task.is_urgent(now, UrgencyWindow::dashboard()));
    assert!(!task.is_urgent(now, UrgencyWindow::display()));
}

#[rstest]
fn tasks_without_a_due_date_are_never_urgent(now: DateTime<Utc>) {
    let title = TaskTitle::new("No deadline").expect("valid title");
    let task = Task::from_new(
        NewTask::new(ProjectId::new(), title).with_status(TaskStatus::ToDo),
        &DefaultClock,
    );

    assert!(!task.is_urgent(now, UrgencyWindow::display()));
}

#[rstest]
fn window_constants_match_the_product_configuration() {
    assert_eq!(UrgencyWindow::DISPLAY_DAYS, 7);
    assert_eq!(UrgencyWindow::DASHBOARD_DAYS, 3);
    assert_eq!(
        UrgencyWindow::display().duration(),
        Duration::days(7)
    );
}
