//! In-memory family directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::family::{
    domain::{Family, FamilyId},
    ports::{FamilyDirectory, FamilyDirectoryError, FamilyDirectoryResult},
};
use crate::property::domain::PropertyId;

/// Thread-safe in-memory family directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFamilyDirectory {
    state: Arc<RwLock<HashMap<FamilyId, Family>>>,
}

impl InMemoryFamilyDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FamilyDirectory for InMemoryFamilyDirectory {
    async fn insert(&self, family: &Family) -> FamilyDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            FamilyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&family.id()) {
            return Err(FamilyDirectoryError::DuplicateFamily(family.id()));
        }
        state.insert(family.id(), family.clone());
        Ok(())
    }

    async fn save(&self, family: &Family) -> FamilyDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            FamilyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&family.id()) {
            return Err(FamilyDirectoryError::NotFound(family.id()));
        }
        state.insert(family.id(), family.clone());
        Ok(())
    }

    async fn all(&self) -> FamilyDirectoryResult<Vec<Family>> {
        let state = self.state.read().map_err(|err| {
            FamilyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: FamilyId) -> FamilyDirectoryResult<Option<Family>> {
        let state = self.state.read().map_err(|err| {
            FamilyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_property(
        &self,
        property_id: PropertyId,
    ) -> FamilyDirectoryResult<Option<Family>> {
        let state = self.state.read().map_err(|err| {
            FamilyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .values()
            .find(|family| family.property_id() == property_id)
            .cloned())
    }

    async fn is_property_occupied(
        &self,
        property_id: PropertyId,
        exclude: Option<FamilyId>,
    ) -> FamilyDirectoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            FamilyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().any(|family| {
            family.property_id() == property_id && exclude != Some(family.id())
        }))
    }

    async fn delete(&self, id: FamilyId) -> FamilyDirectoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            FamilyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(&id).is_some())
    }
}
