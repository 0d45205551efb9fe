//! Drag-and-drop event interpretation.
//!
//! Translates the drag library's drop result into either a status-transition
//! request or one of the no-op outcomes. Interpretation is pure; the
//! reconciler decides what to persist.

use crate::task::domain::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// A position on the board: a column and an index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSlot {
    /// Column status.
    pub status: TaskStatus,
    /// Zero-based position within the column.
    pub index: usize,
}

impl DropSlot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// A completed drag gesture as reported by the drag layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    /// The dragged task.
    pub task_id: TaskId,
    /// Where the drag started.
    pub source: DropSlot,
    /// Where the card was released; `None` when dropped outside any column.
    pub destination: Option<DropSlot>,
}

impl DropEvent {
    /// Creates a drop event.
    #[must_use]
    pub const fn new(task_id: TaskId, source: DropSlot, destination: Option<DropSlot>) -> Self {
        Self {
            task_id,
            source,
            destination,
        }
    }

    /// Interprets the gesture.
    #[must_use]
    pub fn interpret(&self) -> DropOutcome {
        let Some(destination) = self.destination else {
            return DropOutcome::OutsideBoard;
        };
        if destination.status == self.source.status {
            if destination.index == self.source.index {
                return DropOutcome::SameSlot;
            }
            return DropOutcome::ReorderOnly;
        }
        DropOutcome::Transition(TransitionRequest {
            task_id: self.task_id,
            new_status: destination.status,
        })
    }
}

/// Request to move a task to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The task to move.
    pub task_id: TaskId,
    /// The destination column's status.
    pub new_status: TaskStatus,
}

/// What a drop gesture means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Released outside every column; the UI reverts to its pre-drag
    /// snapshot.
    OutsideBoard,
    /// Released on the exact slot it came from.
    SameSlot,
    /// Moved within its own column. Accepted at the UI layer but with no
    /// durable effect: the store has no column-local ordering field.
    ReorderOnly,
    /// Moved to a different column; carries the transition to persist.
    Transition(TransitionRequest),
}

impl DropOutcome {
    /// Returns the transition request, when the drop produced one.
    #[must_use]
    pub const fn transition(&self) -> Option<&TransitionRequest> {
        match self {
            Self::Transition(request) => Some(request),
            Self::OutsideBoard | Self::SameSlot | Self::ReorderOnly => None,
        }
    }
}
