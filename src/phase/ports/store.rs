//! Store port for phase persistence.

use crate::phase::domain::{NewPhase, Phase, PhaseId};
use crate::project::ProjectId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for phase store operations.
pub type PhaseStoreResult<T> = Result<T, PhaseStoreError>;

/// Phase persistence contract.
#[async_trait]
pub trait PhaseStore: Send + Sync {
    /// Lists the phases of a project, ordered by start date ascending.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseStoreError::Persistence`] on transport or storage
    /// failure.
    async fn list(&self, project_id: ProjectId) -> PhaseStoreResult<Vec<Phase>>;

    /// Persists a new phase, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseStoreError::Persistence`] on transport or storage
    /// failure.
    async fn create(&self, new_phase: NewPhase) -> PhaseStoreResult<Phase>;

    /// Persists the full revised record.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseStoreError::NotFound`] when the phase no longer
    /// exists, or [`PhaseStoreError::Persistence`] on failure.
    async fn update(&self, phase: &Phase) -> PhaseStoreResult<()>;

    /// Deletes a phase.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseStoreError::NotFound`] when the phase was already
    /// deleted, or [`PhaseStoreError::Persistence`] on failure.
    async fn delete(&self, id: PhaseId) -> PhaseStoreResult<()>;
}

/// Errors returned by phase store implementations.
#[derive(Debug, Clone, Error)]
pub enum PhaseStoreError {
    /// The referenced phase no longer exists.
    #[error("phase not found: {0}")]
    NotFound(PhaseId),

    /// Transport or storage failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PhaseStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
