//! Service layer for phase planning.

use crate::phase::{
    domain::{NewPhase, Phase, PhaseDomainError, PhaseEdit, PhaseId},
    ports::{PhaseStore, PhaseStoreError},
};
use crate::project::ProjectId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for phase planning operations.
#[derive(Debug, Error)]
pub enum PhasePlanningError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PhaseDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] PhaseStoreError),
}

/// Result type for phase planning service operations.
pub type PhasePlanningResult<T> = Result<T, PhasePlanningError>;

/// Phase planning orchestration service.
#[derive(Clone)]
pub struct PhasePlanningService<S, C>
where
    S: PhaseStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> PhasePlanningService<S, C>
where
    S: PhaseStore,
    C: Clock + Send + Sync,
{
    /// Creates a new phase planning service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Lists a project's phases ordered by start date.
    ///
    /// # Errors
    ///
    /// Returns [`PhasePlanningError::Store`] when the listing fails.
    pub async fn phases(&self, project_id: ProjectId) -> PhasePlanningResult<Vec<Phase>> {
        Ok(self.store.list(project_id).await?)
    }

    /// Creates a phase from a planning-form submission.
    ///
    /// # Errors
    ///
    /// Returns [`PhasePlanningError::Store`] when persistence fails.
    pub async fn create(&self, new_phase: NewPhase) -> PhasePlanningResult<Phase> {
        Ok(self.store.create(new_phase).await?)
    }

    /// Applies a form edit to a phase and persists the revised record.
    ///
    /// Progress and status move independently; no consistency between them
    /// is enforced here or in the domain. An empty edit returns the record
    /// unchanged without writing.
    ///
    /// # Errors
    ///
    /// Returns [`PhasePlanningError::Store`] when the phase no longer
    /// exists or persistence fails. The caller's record is untouched on
    /// failure.
    pub async fn edit(&self, phase: &Phase, edit: PhaseEdit) -> PhasePlanningResult<Phase> {
        if edit.is_empty() {
            return Ok(phase.clone());
        }
        let mut revised = phase.clone();
        revised.apply_edit(edit, &*self.clock);
        self.store.update(&revised).await?;
        Ok(revised)
    }

    /// Deletes a phase after explicit user confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`PhasePlanningError::Store`] when the phase was already
    /// removed or persistence fails.
    pub async fn delete(&self, id: PhaseId) -> PhasePlanningResult<()> {
        Ok(self.store.delete(id).await?)
    }
}
