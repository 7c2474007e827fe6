//! In-memory tenant directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::family::domain::FamilyId;
use crate::tenant::{
    domain::{Tenant, TenantId},
    ports::{TenantDirectory, TenantDirectoryError, TenantDirectoryResult},
};

/// Thread-safe in-memory tenant directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTenantDirectory {
    state: Arc<RwLock<HashMap<TenantId, Tenant>>>,
}

impl InMemoryTenantDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn insert(&self, tenant: &Tenant) -> TenantDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TenantDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&tenant.id()) {
            return Err(TenantDirectoryError::DuplicateTenant(tenant.id()));
        }
        state.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn save(&self, tenant: &Tenant) -> TenantDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TenantDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&tenant.id()) {
            return Err(TenantDirectoryError::NotFound(tenant.id()));
        }
        state.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn all(&self) -> TenantDirectoryResult<Vec<Tenant>> {
        let state = self.state.read().map_err(|err| {
            TenantDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TenantId) -> TenantDirectoryResult<Option<Tenant>> {
        let state = self.state.read().map_err(|err| {
            TenantDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_family(&self, family_id: FamilyId) -> TenantDirectoryResult<Vec<Tenant>> {
        let state = self.state.read().map_err(|err| {
            TenantDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .values()
            .filter(|tenant| tenant.family_id() == family_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TenantId) -> TenantDirectoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TenantDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(&id).is_some())
    }
}
