//! Task aggregate root and creation payload.

use super::{TaskDelta, TaskId, TaskStatus, TaskTitle, UrgencyWindow};
use crate::project::{MemberId, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Invariants:
///
/// - `id` and `project_id` never change after creation.
/// - `updated_at >= created_at` always.
/// - `completion_date` is non-null exactly when the most recent status
///   transition landed on [`TaskStatus::Done`]. A task created directly in
///   `done` carries no completion date until it passes through a transition,
///   matching the original form behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    author_id: Option<MemberId>,
    assignee_id: Option<MemberId>,
    due_date: Option<DateTime<Utc>>,
    completion_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Creation payload: a task without its store-assigned identity and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    author_id: Option<MemberId>,
    assignee_id: Option<MemberId>,
    due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates a payload with the required fields.
    ///
    /// The initial status defaults to [`TaskStatus::NotYet`], matching the
    /// task form's default selection.
    #[must_use]
    pub const fn new(project_id: ProjectId, title: TaskTitle) -> Self {
        Self {
            project_id,
            title,
            description: None,
            status: TaskStatus::NotYet,
            author_id: None,
            assignee_id: None,
            due_date: None,
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the authoring team member.
    #[must_use]
    pub const fn with_author(mut self, author_id: MemberId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Sets the assigned team member.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: MemberId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted author reference, if any.
    pub author_id: Option<MemberId>,
    /// Persisted assignee reference, if any.
    pub assignee_id: Option<MemberId>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted completion date, if any.
    pub completion_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materialises a new record from a creation payload.
    ///
    /// Called by stores when persisting a [`NewTask`]: the store owns
    /// identity and timestamp assignment, the domain owns the field layout.
    #[must_use]
    pub fn from_new(new_task: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            project_id: new_task.project_id,
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            author_id: new_task.author_id,
            assignee_id: new_task.assignee_id,
            due_date: new_task.due_date,
            completion_date: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            author_id: data.author_id,
            assignee_id: data.assignee_id,
            due_date: data.due_date,
            completion_date: data.completion_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the free-text description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the authoring team member, if any.
    #[must_use]
    pub const fn author_id(&self) -> Option<MemberId> {
        self.author_id
    }

    /// Returns the assigned team member, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<MemberId> {
        self.assignee_id
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the completion date, if any.
    #[must_use]
    pub const fn completion_date(&self) -> Option<DateTime<Utc>> {
        self.completion_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Plans the field deltas for a status change without applying them.
    ///
    /// Pure apart from reading the clock once; the caller persists the
    /// returned delta through the store. Requesting the current status
    /// yields the empty delta (idempotent, still valid). Any status may be
    /// requested from any other; there are no forbidden transitions.
    #[must_use]
    pub fn plan_transition(&self, new_status: TaskStatus, clock: &impl Clock) -> TaskDelta {
        if new_status == self.status {
            return TaskDelta::noop();
        }
        TaskDelta::for_transition(self.status, new_status, clock.utc())
    }

    /// Applies a delta to this in-memory record.
    ///
    /// Used for optimistic application before the store confirms, and by
    /// stores to produce the post-write record. Applying the empty delta
    /// changes nothing.
    pub fn apply_delta(&mut self, delta: &TaskDelta) {
        let Some(stamp) = delta.updated_at() else {
            return;
        };
        if let Some(status) = delta.status() {
            self.status = status;
        }
        self.completion_date = delta.completion_date().apply(self.completion_date);
        if let Some(title) = delta.title() {
            self.title = title.clone();
        }
        if let Some(description) = delta.description() {
            self.description = description.clone();
        }
        if let Some(assignee_id) = delta.assignee_id() {
            self.assignee_id = assignee_id;
        }
        if let Some(due_date) = delta.due_date() {
            self.due_date = due_date;
        }
        self.updated_at = stamp;
    }

    /// Classifies the task as urgent for display purposes.
    ///
    /// Urgent means: a due date is set, the status is neither `done` nor
    /// `canceled`, and the due date falls within the window of `now`.
    /// Overdue tasks are urgent under every window.
    #[must_use]
    pub fn is_urgent(&self, now: DateTime<Utc>, window: UrgencyWindow) -> bool {
        if self.status.is_closed() {
            return false;
        }
        self.due_date
            .is_some_and(|due| due - now < window.duration())
    }
}
