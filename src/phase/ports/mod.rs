//! Port contracts for phase persistence.

pub mod store;

pub use store::{PhaseStore, PhaseStoreError, PhaseStoreResult};
