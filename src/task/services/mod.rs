//! Orchestration services for the task lifecycle.

mod lifecycle;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
