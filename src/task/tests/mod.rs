//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain value validation, transition
//! planning, urgency classification, and service orchestration against the
//! in-memory store.

mod service_tests;
mod urgency_tests;
