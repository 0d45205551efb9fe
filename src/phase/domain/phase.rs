//! Phase aggregate root, status, and progress types.

use super::{ParsePhaseStatusError, PhaseDomainError, PhaseId, PhaseName};
use crate::project::ProjectId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Planning status of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// Planned but not begun.
    NotStarted,
    /// Under way.
    InProgress,
    /// Finished.
    Completed,
    /// Behind schedule.
    Delayed,
}

impl PhaseStatus {
    /// All statuses in canonical display order.
    pub const ALL: [Self; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::Delayed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Delayed => "delayed",
        }
    }
}

impl TryFrom<&str> for PhaseStatus {
    type Error = ParsePhaseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "delayed" => Ok(Self::Delayed),
            _ => Err(ParsePhaseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase completion percentage, validated to 0-100.
///
/// Progress and [`PhaseStatus`] are independently settable with no enforced
/// consistency: `progress 100` with `in_progress`, or `completed` at 40 per
/// cent, are both permitted. The planning form exposes them as separate
/// controls and the original behaviour is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// Zero per cent.
    pub const ZERO: Self = Self(0);

    /// One hundred per cent.
    pub const FULL: Self = Self(100);

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseDomainError::InvalidProgress`] when the value exceeds
    /// 100.
    pub const fn new(value: u8) -> Result<Self, PhaseDomainError> {
        if value > 100 {
            return Err(PhaseDomainError::InvalidProgress(value));
        }
        Ok(Self(value))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Phase aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    id: PhaseId,
    project_id: ProjectId,
    name: PhaseName,
    description: Option<String>,
    start_date: NaiveDate,
    due_date: NaiveDate,
    progress: Progress,
    status: PhaseStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Creation payload: a phase without its store-assigned identity and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhase {
    project_id: ProjectId,
    name: PhaseName,
    description: Option<String>,
    start_date: NaiveDate,
    due_date: NaiveDate,
    progress: Progress,
    status: PhaseStatus,
}

impl NewPhase {
    /// Creates a payload with the required fields.
    ///
    /// Progress defaults to zero and status to
    /// [`PhaseStatus::NotStarted`], matching the planning form defaults.
    #[must_use]
    pub const fn new(
        project_id: ProjectId,
        name: PhaseName,
        start_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            project_id,
            name,
            description: None,
            start_date,
            due_date,
            progress: Progress::ZERO,
            status: PhaseStatus::NotStarted,
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial progress.
    #[must_use]
    pub const fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: PhaseStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }
}

/// Detail edits from the phase planning form.
///
/// Every unset field is left untouched. Progress and status travel
/// independently; setting one never implies the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseEdit {
    name: Option<PhaseName>,
    description: Option<Option<String>>,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    progress: Option<Progress>,
    status: Option<PhaseStatus>,
}

impl PhaseEdit {
    /// Creates an edit that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: PhaseName) -> Self {
        self.name = Some(name);
        self
    }

    /// Replaces or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Replaces the start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the progress value.
    #[must_use]
    pub const fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: PhaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns `true` when the edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.progress.is_none()
            && self.status.is_none()
    }
}

/// Parameter object for reconstructing a persisted phase record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPhaseData {
    /// Persisted phase identifier.
    pub id: PhaseId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted name.
    pub name: PhaseName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted progress.
    pub progress: Progress,
    /// Persisted planning status.
    pub status: PhaseStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Phase {
    /// Materialises a new record from a creation payload.
    ///
    /// Called by stores: the store owns identity and timestamp assignment.
    #[must_use]
    pub fn from_new(new_phase: NewPhase, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: PhaseId::new(),
            project_id: new_phase.project_id,
            name: new_phase.name,
            description: new_phase.description,
            start_date: new_phase.start_date,
            due_date: new_phase.due_date,
            progress: new_phase.progress,
            status: new_phase.status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a phase from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPhaseData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            name: data.name,
            description: data.description,
            start_date: data.start_date,
            due_date: data.due_date,
            progress: data.progress,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the phase identifier.
    #[must_use]
    pub const fn id(&self) -> PhaseId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &PhaseName {
        &self.name
    }

    /// Returns the free-text description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the planning status.
    #[must_use]
    pub const fn status(&self) -> PhaseStatus {
        self.status
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

    /// Applies a form edit, refreshing `updated_at`.
    ///
    /// An empty edit leaves the record untouched, including the timestamp.
    pub fn apply_edit(&mut self, edit: PhaseEdit, clock: &impl Clock) {
        if edit.is_empty() {
            return;
        }
        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(start_date) = edit.start_date {
            self.start_date = start_date;
        }
        if let Some(due_date) = edit.due_date {
            self.due_date = due_date;
        }
        if let Some(progress) = edit.progress {
            self.progress = progress;
        }
        if let Some(status) = edit.status {
            self.status = status;
        }
        self.updated_at = clock.utc();
    }
}
