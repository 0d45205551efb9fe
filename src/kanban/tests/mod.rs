//! Unit tests for the kanban module.

mod reconciler_tests;
