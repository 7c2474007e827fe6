//! Directory port for note record storage and lookup.

use crate::agent::domain::AgentId;
use crate::note::domain::{Note, NoteId};
use crate::property::domain::PropertyId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for note directory operations.
pub type NoteDirectoryResult<T> = Result<T, NoteDirectoryError>;

/// Note record storage contract.
#[async_trait]
pub trait NoteDirectory: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`NoteDirectoryError::DuplicateNote`] when the identifier is
    /// already present.
    async fn insert(&self, note: &Note) -> NoteDirectoryResult<()>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`NoteDirectoryError::NotFound`] when no record has the
    /// identifier.
    async fn save(&self, note: &Note) -> NoteDirectoryResult<()>;

    /// Returns a snapshot of every current record.
    async fn all(&self) -> NoteDirectoryResult<Vec<Note>>;

    /// Finds a record by identifier; `None` when absent.
    async fn find_by_id(&self, id: NoteId) -> NoteDirectoryResult<Option<Note>>;

    /// Returns every note owned by the given agent.
    async fn find_by_agent(&self, agent_id: AgentId) -> NoteDirectoryResult<Vec<Note>>;

    /// Returns every note referencing the given property.
    async fn find_by_property(&self, property_id: PropertyId) -> NoteDirectoryResult<Vec<Note>>;

    /// Removes a record, reporting whether anything was removed.
    async fn delete(&self, id: NoteId) -> NoteDirectoryResult<bool>;
}

/// Errors returned by note directory implementations.
#[derive(Debug, Clone, Error)]
pub enum NoteDirectoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate note identifier: {0}")]
    DuplicateNote(NoteId),

    /// The record vanished between lookup and save.
    #[error("note not found: {0}")]
    NotFound(NoteId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl NoteDirectoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
