//! Service layer for agent creation, maintenance, and search.

use crate::agent::{
    domain::{Agent, AgentChanges, AgentId, AgentSearchParams, NewAgent, PaginatedResult},
    ports::{AgentDirectory, AgentDirectoryError},
    validation,
};
use crate::validation::ValidationErrors;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating an agent record.
///
/// Carries the submission as received; validation and normalisation happen
/// when the roster service accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAgentRequest {
    first_name: String,
    last_name: String,
    email: String,
    mobile_number: String,
}

impl CreateAgentRequest {
    /// Creates a request from raw submission fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        mobile_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            mobile_number: mobile_number.into(),
        }
    }

    /// Submitted given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Submitted family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Submitted contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Submitted phone number.
    #[must_use]
    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    /// Trims every field and lowercases the email.
    fn into_details(self) -> NewAgent {
        NewAgent {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_lowercase(),
            mobile_number: self.mobile_number.trim().to_owned(),
        }
    }
}

/// Request payload for patching an agent record.
///
/// Absent fields are left unchanged; present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAgentRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    mobile_number: Option<String>,
}

impl UpdateAgentRequest {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            mobile_number: None,
        }
    }

    /// Sets the replacement given name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the replacement family name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the replacement contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the replacement phone number.
    #[must_use]
    pub fn with_mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = Some(mobile_number.into());
        self
    }

    /// Submitted replacement given name, when present.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Submitted replacement family name, when present.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Submitted replacement contact email, when present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Submitted replacement phone number, when present.
    #[must_use]
    pub fn mobile_number(&self) -> Option<&str> {
        self.mobile_number.as_deref()
    }

    /// Trims the present fields and lowercases a present email.
    fn into_changes(self) -> AgentChanges {
        AgentChanges {
            first_name: self.first_name.map(|value| value.trim().to_owned()),
            last_name: self.last_name.map(|value| value.trim().to_owned()),
            email: self.email.map(|value| value.trim().to_lowercase()),
            mobile_number: self.mobile_number.map(|value| value.trim().to_owned()),
        }
    }
}

/// Service-level errors for agent roster operations.
#[derive(Debug, Error)]
pub enum AgentRosterError {
    /// A submission failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] AgentDirectoryError),
}

/// Result type for agent roster operations.
pub type AgentRosterResult<T> = Result<T, AgentRosterError>;

/// Agent roster orchestration service.
///
/// Validates and normalises submissions before they reach the directory, and
/// stamps lifecycle timestamps through the injected clock.
#[derive(Clone)]
pub struct AgentRosterService<D, C>
where
    D: AgentDirectory,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<D, C> AgentRosterService<D, C>
where
    D: AgentDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self { directory, clock }
    }

    /// Creates an agent record from a submission.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRosterError::Validation`] when a field fails its
    /// rules, or [`AgentRosterError::Directory`] when the store rejects the
    /// insert.
    pub async fn create(&self, request: CreateAgentRequest) -> AgentRosterResult<Agent> {
        validation::validate_create(&request)?;
        let agent = Agent::new(request.into_details(), self.clock.as_ref());
        self.directory.insert(&agent).await?;
        Ok(agent)
    }

    /// Patches an agent record.
    ///
    /// Returns `None` when no record has the identifier. A successful patch
    /// refreshes the update timestamp even when it changes nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRosterError::Validation`] when a present field fails
    /// its rules, or [`AgentRosterError::Directory`] when the store rejects
    /// the save.
    pub async fn update(
        &self,
        id: AgentId,
        request: UpdateAgentRequest,
    ) -> AgentRosterResult<Option<Agent>> {
        validation::validate_update(&request)?;
        let Some(mut agent) = self.directory.find_by_id(id).await? else {
            return Ok(None);
        };
        agent.apply(request.into_changes(), self.clock.as_ref());
        self.directory.save(&agent).await?;
        Ok(Some(agent))
    }

    /// Returns a snapshot of every agent record.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRosterError::Directory`] when the store is
    /// unavailable.
    pub async fn all(&self) -> AgentRosterResult<Vec<Agent>> {
        Ok(self.directory.all().await?)
    }

    /// Finds an agent record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRosterError::Directory`] when the store is
    /// unavailable.
    pub async fn find_by_id(&self, id: AgentId) -> AgentRosterResult<Option<Agent>> {
        Ok(self.directory.find_by_id(id).await?)
    }

    /// Runs a roster search.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRosterError::Directory`] when the store is
    /// unavailable.
    pub async fn search(
        &self,
        params: &AgentSearchParams,
    ) -> AgentRosterResult<PaginatedResult<Agent>> {
        Ok(self.directory.search(params).await?)
    }

    /// Deletes an agent record, reporting whether one existed.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRosterError::Directory`] when the store is
    /// unavailable.
    pub async fn delete(&self, id: AgentId) -> AgentRosterResult<bool> {
        Ok(self.directory.delete(id).await?)
    }
}
