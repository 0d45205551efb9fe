//! Unit tests for the phase module.
