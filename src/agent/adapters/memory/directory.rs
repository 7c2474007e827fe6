//! In-memory agent directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::agent::{
    domain::{Agent, AgentId, AgentSearchParams, PaginatedResult, SearchDefaults, run_search},
    ports::{AgentDirectory, AgentDirectoryError, AgentDirectoryResult},
};

/// Thread-safe in-memory agent directory.
///
/// Records live for the process lifetime only. The default page size used by
/// the search pipeline is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentDirectory {
    state: Arc<RwLock<HashMap<AgentId, Agent>>>,
    defaults: SearchDefaults,
}

impl InMemoryAgentDirectory {
    /// Creates an empty directory with the stock search defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directory with custom search defaults.
    #[must_use]
    pub fn with_defaults(defaults: SearchDefaults) -> Self {
        Self {
            state: Arc::default(),
            defaults,
        }
    }
}

#[async_trait]
impl AgentDirectory for InMemoryAgentDirectory {
    async fn insert(&self, agent: &Agent) -> AgentDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AgentDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&agent.id()) {
            return Err(AgentDirectoryError::DuplicateAgent(agent.id()));
        }
        state.insert(agent.id(), agent.clone());
        Ok(())
    }

    async fn save(&self, agent: &Agent) -> AgentDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AgentDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&agent.id()) {
            return Err(AgentDirectoryError::NotFound(agent.id()));
        }
        state.insert(agent.id(), agent.clone());
        Ok(())
    }

    async fn all(&self) -> AgentDirectoryResult<Vec<Agent>> {
        let state = self.state.read().map_err(|err| {
            AgentDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AgentId) -> AgentDirectoryResult<Option<Agent>> {
        let state = self.state.read().map_err(|err| {
            AgentDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn search(
        &self,
        params: &AgentSearchParams,
    ) -> AgentDirectoryResult<PaginatedResult<Agent>> {
        let snapshot = self.all().await?;
        Ok(run_search(snapshot, params, &self.defaults))
    }

    async fn delete(&self, id: AgentId) -> AgentDirectoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            AgentDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(&id).is_some())
    }
}
