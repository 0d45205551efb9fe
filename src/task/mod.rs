//! Task lifecycle management.
//!
//! Owns the six-state status enum, the status-transition side effects
//! (completion timestamp set on entering `done`, cleared on leaving it,
//! `updated_at` refreshed on every mutation), urgency classification, and
//! the persistence call contract. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
