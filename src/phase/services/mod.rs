//! Orchestration services for phase planning.

mod planning;

pub use planning::{PhasePlanningError, PhasePlanningResult, PhasePlanningService};
