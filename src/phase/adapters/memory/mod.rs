//! In-memory adapter implementations of the phase ports.

mod phase;

pub use phase::InMemoryPhaseStore;
