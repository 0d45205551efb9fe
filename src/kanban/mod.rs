//! Kanban board reconciliation.
//!
//! Partitions a flat task list into status-keyed columns, interprets
//! drag-and-drop events as status-transition requests, and reconciles
//! optimistic local state against the persistence result with rollback on
//! failure. Status side effects themselves live in the task domain; this
//! module only decides *when* a transition is requested.

mod board;
mod drop;
mod reconciler;

pub use board::{BoardColumn, BoardLayout, BoardSnapshot, ColumnView};
pub use drop::{DropEvent, DropOutcome, DropSlot, TransitionRequest};
pub use reconciler::{KanbanError, KanbanReconciler, KanbanResult};

#[cfg(test)]
mod tests;
