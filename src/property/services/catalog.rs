//! Service layer for the property catalog.

use crate::agent::{
    domain::AgentId,
    ports::{AgentDirectory, AgentDirectoryError},
};
use crate::property::{
    domain::{NewProperty, Property, PropertyChanges, PropertyId},
    ports::{PropertyDirectory, PropertyDirectoryError},
    validation,
};
use crate::validation::{FieldError, ValidationErrors};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a property record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePropertyRequest {
    address: String,
    agent_id: AgentId,
}

impl CreatePropertyRequest {
    /// Creates a request from raw submission fields.
    #[must_use]
    pub fn new(address: impl Into<String>, agent_id: AgentId) -> Self {
        Self {
            address: address.into(),
            agent_id,
        }
    }

    /// Submitted street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Submitted managing agent.
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    fn into_details(self) -> NewProperty {
        NewProperty {
            address: self.address.trim().to_owned(),
            agent_id: self.agent_id,
        }
    }
}

/// Request payload for patching a property record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePropertyRequest {
    address: Option<String>,
    agent_id: Option<AgentId>,
}

impl UpdatePropertyRequest {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            address: None,
            agent_id: None,
        }
    }

    /// Sets the replacement address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the replacement managing agent.
    #[must_use]
    pub const fn with_agent(mut self, agent_id: AgentId) -> Self {
        self.agent_id = Some(agent_id);
        self
    }

    /// Submitted replacement address, when present.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Submitted replacement managing agent, when present.
    #[must_use]
    pub const fn agent_id(&self) -> Option<AgentId> {
        self.agent_id
    }

    fn into_changes(self) -> PropertyChanges {
        PropertyChanges {
            address: self.address.map(|value| value.trim().to_owned()),
            agent_id: self.agent_id,
        }
    }
}

/// Service-level errors for property catalog operations.
#[derive(Debug, Error)]
pub enum PropertyCatalogError {
    /// A submission failed field validation or referenced a missing agent.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Property directory operation failed.
    #[error(transparent)]
    Properties(#[from] PropertyDirectoryError),
    /// Agent directory operation failed while checking a reference.
    #[error(transparent)]
    Agents(#[from] AgentDirectoryError),
}

/// Result type for property catalog operations.
pub type PropertyCatalogResult<T> = Result<T, PropertyCatalogError>;

/// Property catalog orchestration service.
///
/// Checks that a submission's managing agent exists before storing the
/// record; deletes do not cascade to notes or families.
#[derive(Clone)]
pub struct PropertyCatalogService<P, A, C>
where
    P: PropertyDirectory,
    A: AgentDirectory,
    C: Clock + Send + Sync,
{
    properties: Arc<P>,
    agents: Arc<A>,
    clock: Arc<C>,
}

impl<P, A, C> PropertyCatalogService<P, A, C>
where
    P: PropertyDirectory,
    A: AgentDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(properties: Arc<P>, agents: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            properties,
            agents,
            clock,
        }
    }

    /// Creates a property record from a submission.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Validation`] when the address is
    /// blank or the managing agent does not exist, and a directory error
    /// when a store is unavailable.
    pub async fn create(&self, request: CreatePropertyRequest) -> PropertyCatalogResult<Property> {
        let mut errors = validation::check_create(&request);
        if self.agents.find_by_id(request.agent_id()).await?.is_none() {
            errors.push(FieldError::new("agentId", "Agent not found"));
        }
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let property = Property::new(request.into_details(), self.clock.as_ref());
        self.properties.insert(&property).await?;
        Ok(property)
    }

    /// Patches a property record; `None` when no record has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyCatalogError::Validation`] when a present field
    /// fails its rules or a present agent reference does not exist, and a
    /// directory error when a store is unavailable.
    pub async fn update(
        &self,
        id: PropertyId,
        request: UpdatePropertyRequest,
    ) -> PropertyCatalogResult<Option<Property>> {
        let mut errors = validation::check_update(&request);
        if let Some(agent_id) = request.agent_id()
            && self.agents.find_by_id(agent_id).await?.is_none()
        {
            errors.push(FieldError::new("agentId", "Agent not found"));
        }
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let Some(mut property) = self.properties.find_by_id(id).await? else {
            return Ok(None);
        };
        property.apply(request.into_changes(), self.clock.as_ref());
        self.properties.save(&property).await?;
        Ok(Some(property))
    }

    /// Returns a snapshot of every property record.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn all(&self) -> PropertyCatalogResult<Vec<Property>> {
        Ok(self.properties.all().await?)
    }

    /// Finds a property record by identifier; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_id(&self, id: PropertyId) -> PropertyCatalogResult<Option<Property>> {
        Ok(self.properties.find_by_id(id).await?)
    }

    /// Returns every property managed by the given agent.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_agent(&self, agent_id: AgentId) -> PropertyCatalogResult<Vec<Property>> {
        Ok(self.properties.find_by_agent(agent_id).await?)
    }

    /// Deletes a property record, reporting whether one existed.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn delete(&self, id: PropertyId) -> PropertyCatalogResult<bool> {
        Ok(self.properties.delete(id).await?)
    }
}
