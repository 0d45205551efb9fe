//! Adapter implementations of the phase ports.

pub mod memory;
