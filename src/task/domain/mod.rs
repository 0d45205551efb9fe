//! Domain model for the task lifecycle.
//!
//! The task domain owns the status enum, the completion-date bookkeeping
//! attached to status transitions, and urgency classification, keeping all
//! infrastructure concerns outside of the domain boundary. Transition
//! planning is pure: it produces a [`TaskDelta`] that the caller persists
//! through a store port.

mod delta;
mod error;
mod ids;
mod status;
mod task;
mod urgency;

pub use delta::{CompletionChange, TaskDelta, TaskEdit};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
pub use urgency::UrgencyWindow;
