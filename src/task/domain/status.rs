//! Task status enum and parsing.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// The status machine is deliberately unconstrained: any status may move to
/// any other status, including out of `Done` or `Canceled`. The UI never
/// blocks a transition; it only computes side effects (completion-date
/// bookkeeping). Do not add transition guards here without a product
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Captured but not yet scheduled; rendered outside the board grid.
    NotYet,
    /// Queued for work.
    ToDo,
    /// Actively being worked on.
    InProgress,
    /// Blocked on somebody else (contractor, permit office, delivery).
    Waiting,
    /// Finished; the only status that carries a completion date.
    Done,
    /// Abandoned without completion.
    Canceled,
}

impl TaskStatus {
    /// All statuses in canonical display order.
    pub const ALL: [Self; 6] = [
        Self::NotYet,
        Self::ToDo,
        Self::InProgress,
        Self::Waiting,
        Self::Done,
        Self::Canceled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotYet => "not_yet",
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Waiting => "waiting",
            Self::Done => "done",
            Self::Canceled => "canceled",
        }
    }

    /// Returns `true` for statuses that end the task's active life.
    ///
    /// Closed tasks are excluded from urgency classification regardless of
    /// due date.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Done | Self::Canceled)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_yet" => Ok(Self::NotYet),
            "to_do" => Ok(Self::ToDo),
            "in_progress" => Ok(Self::InProgress),
            "waiting" => Ok(Self::Waiting),
            "done" => Ok(Self::Done),
            "canceled" => Ok(Self::Canceled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
