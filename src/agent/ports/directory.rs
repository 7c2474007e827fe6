//! Directory port for agent record storage, lookup, and search.

use crate::agent::domain::{Agent, AgentId, AgentSearchParams, PaginatedResult};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent directory operations.
pub type AgentDirectoryResult<T> = Result<T, AgentDirectoryError>;

/// Agent record storage contract.
///
/// The directory owns its records exclusively: callers receive cloned
/// snapshots, never live views. Absence is reported as a value (`None` or
/// `false`), not an error.
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDirectoryError::DuplicateAgent`] when the identifier
    /// is already present.
    async fn insert(&self, agent: &Agent) -> AgentDirectoryResult<()>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDirectoryError::NotFound`] when no record has the
    /// identifier.
    async fn save(&self, agent: &Agent) -> AgentDirectoryResult<()>;

    /// Returns a snapshot of every current record, in no particular order.
    async fn all(&self) -> AgentDirectoryResult<Vec<Agent>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: AgentId) -> AgentDirectoryResult<Option<Agent>>;

    /// Runs the search pipeline over the current record set.
    async fn search(
        &self,
        params: &AgentSearchParams,
    ) -> AgentDirectoryResult<PaginatedResult<Agent>>;

    /// Removes a record, reporting whether anything was removed.
    async fn delete(&self, id: AgentId) -> AgentDirectoryResult<bool>;
}

/// Errors returned by agent directory implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentDirectoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate agent identifier: {0}")]
    DuplicateAgent(AgentId),

    /// The record vanished between lookup and save.
    #[error("agent not found: {0}")]
    NotFound(AgentId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentDirectoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
