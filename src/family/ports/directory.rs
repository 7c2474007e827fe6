//! Directory port for family record storage and occupancy lookup.

use crate::family::domain::{Family, FamilyId};
use crate::property::domain::PropertyId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for family directory operations.
pub type FamilyDirectoryResult<T> = Result<T, FamilyDirectoryError>;

/// Family record storage contract.
#[async_trait]
pub trait FamilyDirectory: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyDirectoryError::DuplicateFamily`] when the identifier
    /// is already present.
    async fn insert(&self, family: &Family) -> FamilyDirectoryResult<()>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyDirectoryError::NotFound`] when no record has the
    /// identifier.
    async fn save(&self, family: &Family) -> FamilyDirectoryResult<()>;

    /// Returns a snapshot of every current record.
    async fn all(&self) -> FamilyDirectoryResult<Vec<Family>>;

    /// Finds a record by identifier; `None` when absent.
    async fn find_by_id(&self, id: FamilyId) -> FamilyDirectoryResult<Option<Family>>;

    /// Finds the family occupying the given property, if any.
    async fn find_by_property(
        &self,
        property_id: PropertyId,
    ) -> FamilyDirectoryResult<Option<Family>>;

    /// Reports whether a property is occupied, optionally ignoring one
    /// family (the one being reassigned).
    async fn is_property_occupied(
        &self,
        property_id: PropertyId,
        exclude: Option<FamilyId>,
    ) -> FamilyDirectoryResult<bool>;

    /// Removes a record, reporting whether anything was removed.
    async fn delete(&self, id: FamilyId) -> FamilyDirectoryResult<bool>;
}

/// Errors returned by family directory implementations.
#[derive(Debug, Clone, Error)]
pub enum FamilyDirectoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate family identifier: {0}")]
    DuplicateFamily(FamilyId),

    /// The record vanished between lookup and save.
    #[error("family not found: {0}")]
    NotFound(FamilyId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl FamilyDirectoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
