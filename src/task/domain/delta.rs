//! Partial-update types for task persistence.
//!
//! A [`TaskDelta`] is the field set handed to the store's partial-update
//! operation. Status transitions produce deltas via
//! [`Task::plan_transition`](super::Task::plan_transition); detail edits
//! produce them from a [`TaskEdit`]. Both paths leave every unmentioned
//! field untouched.

use super::{TaskStatus, TaskTitle};
use crate::project::MemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Effect of a delta on the task's completion date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionChange {
    /// Leave the stored completion date as it is.
    #[default]
    Untouched,
    /// Set the completion date to the given instant.
    Set(DateTime<Utc>),
    /// Clear the completion date.
    Clear,
}

impl CompletionChange {
    /// Applies this change to a current completion-date value.
    #[must_use]
    pub const fn apply(self, current: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        match self {
            Self::Untouched => current,
            Self::Set(instant) => Some(instant),
            Self::Clear => None,
        }
    }
}

/// Partial update applied to a persisted task record.
///
/// An empty delta (`is_noop() == true`) is valid and represents an
/// idempotent request; callers skip the store round trip for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDelta {
    status: Option<TaskStatus>,
    completion_date: CompletionChange,
    title: Option<TaskTitle>,
    description: Option<Option<String>>,
    assignee_id: Option<Option<MemberId>>,
    due_date: Option<Option<DateTime<Utc>>>,
    updated_at: Option<DateTime<Utc>>,
}

impl TaskDelta {
    /// Builds the delta for a status transition.
    ///
    /// The completion-date rule: entering `done` sets it to `now`, leaving
    /// `done` clears it, and a transition that neither enters nor leaves
    /// `done` leaves it untouched.
    #[must_use]
    pub(crate) const fn for_transition(
        current_status: TaskStatus,
        new_status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Self {
        let completion_date = if matches!(new_status, TaskStatus::Done) {
            CompletionChange::Set(now)
        } else if matches!(current_status, TaskStatus::Done) {
            CompletionChange::Clear
        } else {
            CompletionChange::Untouched
        };

        Self {
            status: Some(new_status),
            completion_date,
            title: None,
            description: None,
            assignee_id: None,
            due_date: None,
            updated_at: Some(now),
        }
    }

    /// The empty, idempotent delta.
    #[must_use]
    pub(crate) const fn noop() -> Self {
        Self {
            status: None,
            completion_date: CompletionChange::Untouched,
            title: None,
            description: None,
            assignee_id: None,
            due_date: None,
            updated_at: None,
        }
    }

    /// Returns `true` when the delta changes nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.updated_at.is_none()
    }

    /// Returns the target status, if the delta changes it.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the completion-date effect.
    #[must_use]
    pub const fn completion_date(&self) -> CompletionChange {
        self.completion_date
    }

    /// Returns the new title, if the delta changes it.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the new description value, if the delta changes it.
    #[must_use]
    pub const fn description(&self) -> Option<&Option<String>> {
        self.description.as_ref()
    }

    /// Returns the new assignee value, if the delta changes it.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<Option<MemberId>> {
        self.assignee_id
    }

    /// Returns the new due-date value, if the delta changes it.
    #[must_use]
    pub const fn due_date(&self) -> Option<Option<DateTime<Utc>>> {
        self.due_date
    }

    /// Returns the `updated_at` stamp carried by a non-empty delta.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Detail edits unrelated to status, as submitted from the task form.
///
/// The outer `Option` on each field distinguishes "leave untouched" from
/// "set to this value"; the inner `Option` on nullable fields carries the
/// new value, where `None` clears the field. Edits never touch the
/// completion date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<TaskTitle>,
    description: Option<Option<String>>,
    assignee_id: Option<Option<MemberId>>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskEdit {
    /// Creates an edit that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Replaces or clears the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: Option<MemberId>) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Replaces or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns `true` when the edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.assignee_id.is_none()
            && self.due_date.is_none()
    }

    /// Converts the edit into a persistable delta stamped at `now`.
    ///
    /// An empty edit converts to the no-op delta without a stamp.
    #[must_use]
    pub fn into_delta(self, now: DateTime<Utc>) -> TaskDelta {
        if self.is_empty() {
            return TaskDelta::noop();
        }
        TaskDelta {
            status: None,
            completion_date: CompletionChange::Untouched,
            title: self.title,
            description: self.description,
            assignee_id: self.assignee_id,
            due_date: self.due_date,
            updated_at: Some(now),
        }
    }
}
