//! In-memory phase store for tests and demo wiring.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::phase::{
    domain::{NewPhase, Phase, PhaseId},
    ports::{PhaseStore, PhaseStoreError, PhaseStoreResult},
};
use crate::project::ProjectId;

/// Thread-safe in-memory phase store.
#[derive(Debug, Clone)]
pub struct InMemoryPhaseStore<C> {
    state: Arc<RwLock<HashMap<PhaseId, Phase>>>,
    clock: Arc<C>,
}

impl<C> InMemoryPhaseStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory store using the given clock for
    /// store-assigned timestamps.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> PhaseStoreError {
    PhaseStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> PhaseStore for InMemoryPhaseStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self, project_id: ProjectId) -> PhaseStoreResult<Vec<Phase>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut phases: Vec<Phase> = state
            .values()
            .filter(|phase| phase.project_id() == project_id)
            .cloned()
            .collect();
        phases.sort_by_key(|phase| (phase.start_date(), phase.created_at()));
        Ok(phases)
    }

    async fn create(&self, new_phase: NewPhase) -> PhaseStoreResult<Phase> {
        let phase = Phase::from_new(new_phase, &*self.clock);
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.insert(phase.id(), phase.clone());
        Ok(phase)
    }

    async fn update(&self, phase: &Phase) -> PhaseStoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let slot = state
            .get_mut(&phase.id())
            .ok_or(PhaseStoreError::NotFound(phase.id()))?;
        *slot = phase.clone();
        Ok(())
    }

    async fn delete(&self, id: PhaseId) -> PhaseStoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.remove(&id).ok_or(PhaseStoreError::NotFound(id))?;
        Ok(())
    }
}
