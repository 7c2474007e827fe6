//! Directory port for property record storage and lookup.

use crate::agent::domain::AgentId;
use crate::property::domain::{Property, PropertyId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for property directory operations.
pub type PropertyDirectoryResult<T> = Result<T, PropertyDirectoryError>;

/// Property record storage contract.
#[async_trait]
pub trait PropertyDirectory: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDirectoryError::DuplicateProperty`] when the
    /// identifier is already present.
    async fn insert(&self, property: &Property) -> PropertyDirectoryResult<()>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDirectoryError::NotFound`] when no record has the
    /// identifier.
    async fn save(&self, property: &Property) -> PropertyDirectoryResult<()>;

    /// Returns a snapshot of every current record.
    async fn all(&self) -> PropertyDirectoryResult<Vec<Property>>;

    /// Finds a record by identifier; `None` when absent.
    async fn find_by_id(&self, id: PropertyId) -> PropertyDirectoryResult<Option<Property>>;

    /// Returns every property managed by the given agent.
    async fn find_by_agent(&self, agent_id: AgentId) -> PropertyDirectoryResult<Vec<Property>>;

    /// Removes a record, reporting whether anything was removed.
    async fn delete(&self, id: PropertyId) -> PropertyDirectoryResult<bool>;
}

/// Errors returned by property directory implementations.
#[derive(Debug, Clone, Error)]
pub enum PropertyDirectoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate property identifier: {0}")]
    DuplicateProperty(PropertyId),

    /// The record vanished between lookup and save.
    #[error("property not found: {0}")]
    NotFound(PropertyId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl PropertyDirectoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
