//! Domain model for project phase planning.
//!
//! Phases carry a date range, an integer completion percentage, and a
//! four-state planning status. Progress and status are deliberately
//! uncoupled; the domain validates each value on its own and enforces no
//! cross-field consistency.

mod error;
mod ids;
mod phase;

pub use error::{ParsePhaseStatusError, PhaseDomainError};
pub use ids::{PhaseId, PhaseName};
pub use phase::{NewPhase, PersistedPhaseData, Phase, PhaseEdit, PhaseStatus, Progress};
