//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services
//! and the kanban reconciler.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
