//! In-memory property directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::agent::domain::AgentId;
use crate::property::{
    domain::{Property, PropertyId},
    ports::{PropertyDirectory, PropertyDirectoryError, PropertyDirectoryResult},
};

/// Thread-safe in-memory property directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropertyDirectory {
    state: Arc<RwLock<HashMap<PropertyId, Property>>>,
}

impl InMemoryPropertyDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyDirectory for InMemoryPropertyDirectory {
    async fn insert(&self, property: &Property) -> PropertyDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PropertyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&property.id()) {
            return Err(PropertyDirectoryError::DuplicateProperty(property.id()));
        }
        state.insert(property.id(), property.clone());
        Ok(())
    }

    async fn save(&self, property: &Property) -> PropertyDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PropertyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&property.id()) {
            return Err(PropertyDirectoryError::NotFound(property.id()));
        }
        state.insert(property.id(), property.clone());
        Ok(())
    }

    async fn all(&self) -> PropertyDirectoryResult<Vec<Property>> {
        let state = self.state.read().map_err(|err| {
            PropertyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PropertyId) -> PropertyDirectoryResult<Option<Property>> {
        let state = self.state.read().map_err(|err| {
            PropertyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_agent(&self, agent_id: AgentId) -> PropertyDirectoryResult<Vec<Property>> {
        let state = self.state.read().map_err(|err| {
            PropertyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .values()
            .filter(|property| property.agent_id() == agent_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: PropertyId) -> PropertyDirectoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            PropertyDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(&id).is_some())
    }
}
