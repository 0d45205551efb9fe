//! In-memory adapter implementations of the task ports.

mod task;

pub use task::InMemoryTaskStore;
