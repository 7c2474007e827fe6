//! Directory port for tenant record storage and lookup.

use crate::family::domain::FamilyId;
use crate::tenant::domain::{Tenant, TenantId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tenant directory operations.
pub type TenantDirectoryResult<T> = Result<T, TenantDirectoryError>;

/// Tenant record storage contract.
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`TenantDirectoryError::DuplicateTenant`] when the identifier
    /// is already present.
    async fn insert(&self, tenant: &Tenant) -> TenantDirectoryResult<()>;

    /// Persists changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`TenantDirectoryError::NotFound`] when no record has the
    /// identifier.
    async fn save(&self, tenant: &Tenant) -> TenantDirectoryResult<()>;

    /// Returns a snapshot of every current record.
    async fn all(&self) -> TenantDirectoryResult<Vec<Tenant>>;

    /// Finds a record by identifier; `None` when absent.
    async fn find_by_id(&self, id: TenantId) -> TenantDirectoryResult<Option<Tenant>>;

    /// Returns every tenant in the given family.
    async fn find_by_family(&self, family_id: FamilyId) -> TenantDirectoryResult<Vec<Tenant>>;

    /// Removes a record, reporting whether anything was removed.
    async fn delete(&self, id: TenantId) -> TenantDirectoryResult<bool>;
}

/// Errors returned by tenant directory implementations.
#[derive(Debug, Clone, Error)]
pub enum TenantDirectoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate tenant identifier: {0}")]
    DuplicateTenant(TenantId),

    /// The record vanished between lookup and save.
    #[error("tenant not found: {0}")]
    NotFound(TenantId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TenantDirectoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
