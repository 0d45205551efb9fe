//! Sitedesk: construction-project management core.
//!
//! This crate provides the domain core behind a project dashboard: the task
//! lifecycle with its completion-date bookkeeping, kanban-board
//! reconciliation with optimistic updates and rollback, and phase planning.
//! Presentation and the hosted backing store sit outside the crate and talk
//! to it through the exposed services and ports.
//!
//! # Architecture
//!
//! Sitedesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, hosted
//!   store bindings)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, status transitions, urgency classification
//! - [`kanban`]: Column partitioning, drag-and-drop interpretation,
//!   optimistic reconciliation
//! - [`phase`]: Phase planning records and their service
//! - [`project`]: Shared project-scoped identifier types

pub mod kanban;
pub mod phase;
pub mod project;
pub mod task;
