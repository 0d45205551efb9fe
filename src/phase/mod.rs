//! Project phase planning.
//!
//! Phases share the task family of operations (create, list, edit, delete)
//! with a simpler shape: a date range, an integer progress percentage, and
//! a four-state status with no coupling between the two. The module follows
//! the same hexagonal layout as [`crate::task`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
