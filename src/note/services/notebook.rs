//! Service layer for the notebook.

use crate::agent::{
    domain::AgentId,
    ports::{AgentDirectory, AgentDirectoryError},
};
use crate::note::{
    domain::{NewNote, Note, NoteChanges, NoteId},
    ports::{NoteDirectory, NoteDirectoryError},
    validation,
};
use crate::property::{
    domain::PropertyId,
    ports::{PropertyDirectory, PropertyDirectoryError},
};
use crate::validation::{FieldError, ValidationErrors};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a note record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNoteRequest {
    title: String,
    content: Option<String>,
    agent_id: AgentId,
    property_id: Option<PropertyId>,
    due_date: Option<DateTime<Utc>>,
    is_reminder: bool,
}

impl CreateNoteRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, agent_id: AgentId) -> Self {
        Self {
            title: title.into(),
            content: None,
            agent_id,
            property_id: None,
            due_date: None,
            is_reminder: false,
        }
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attaches the note to a property.
    #[must_use]
    pub const fn with_property(mut self, property_id: PropertyId) -> Self {
        self.property_id = Some(property_id);
        self
    }

    /// Sets the follow-up instant.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Marks or unmarks the note as a reminder.
    #[must_use]
    pub const fn with_reminder(mut self, is_reminder: bool) -> Self {
        self.is_reminder = is_reminder;
        self
    }

    /// Submitted title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Submitted body text, when supplied.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Submitted owning agent.
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    /// Submitted property reference, when any.
    #[must_use]
    pub const fn property_id(&self) -> Option<PropertyId> {
        self.property_id
    }

    fn into_details(self) -> NewNote {
        NewNote {
            title: self.title.trim().to_owned(),
            content: self.content.and_then(normalise_content),
            agent_id: self.agent_id,
            property_id: self.property_id,
            due_date: self.due_date,
            is_reminder: self.is_reminder,
        }
    }
}

/// Request payload for patching a note record.
///
/// Content, property reference, and due date are tri-state: absent leaves
/// the stored value, a replacement overwrites it, and an explicit clear
/// removes it. The owning agent cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateNoteRequest {
    title: Option<String>,
    content: Option<Option<String>>,
    property_id: Option<Option<PropertyId>>,
    due_date: Option<Option<DateTime<Utc>>>,
    is_reminder: Option<bool>,
}

impl UpdateNoteRequest {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            content: None,
            property_id: None,
            due_date: None,
            is_reminder: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement body text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Some(content.into()));
        self
    }

    /// Clears the stored body text.
    #[must_use]
    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    /// Sets a replacement property reference.
    #[must_use]
    pub const fn with_property(mut self, property_id: PropertyId) -> Self {
        self.property_id = Some(Some(property_id));
        self
    }

    /// Clears the stored property reference.
    #[must_use]
    pub const fn clear_property(mut self) -> Self {
        self.property_id = Some(None);
        self
    }

    /// Sets a replacement follow-up instant.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the stored follow-up instant.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Sets the replacement reminder flag.
    #[must_use]
    pub const fn with_reminder(mut self, is_reminder: bool) -> Self {
        self.is_reminder = Some(is_reminder);
        self
    }

    /// Submitted replacement title, when present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Submitted property change, when present; the inner value is `None`
    /// for an explicit clear.
    #[must_use]
    pub const fn property_id(&self) -> Option<Option<PropertyId>> {
        self.property_id
    }

    fn into_changes(self) -> NoteChanges {
        NoteChanges {
            title: self.title.map(|value| value.trim().to_owned()),
            content: self.content.map(|inner| inner.and_then(normalise_content)),
            property_id: self.property_id,
            due_date: self.due_date,
            is_reminder: self.is_reminder,
        }
    }
}

/// Trims body text, collapsing blank input to `None`.
fn normalise_content(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Service-level errors for notebook operations.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// A submission failed field validation or referenced a missing record.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Note directory operation failed.
    #[error(transparent)]
    Notes(#[from] NoteDirectoryError),
    /// Agent directory operation failed while checking a reference.
    #[error(transparent)]
    Agents(#[from] AgentDirectoryError),
    /// Property directory operation failed while checking a reference.
    #[error(transparent)]
    Properties(#[from] PropertyDirectoryError),
}

/// Result type for notebook operations.
pub type NotebookResult<T> = Result<T, NotebookError>;

/// Notebook orchestration service.
///
/// Checks that the owning agent exists, and that a referenced property
/// exists, before storing a note. Deleting agents or properties does not
/// cascade here; orphaned notes stay until removed explicitly.
#[derive(Clone)]
pub struct NotebookService<N, A, P, C>
where
    N: NoteDirectory,
    A: AgentDirectory,
    P: PropertyDirectory,
    C: Clock + Send + Sync,
{
    notes: Arc<N>,
    agents: Arc<A>,
    properties: Arc<P>,
    clock: Arc<C>,
}

impl<N, A, P, C> NotebookService<N, A, P, C>
where
    N: NoteDirectory,
    A: AgentDirectory,
    P: PropertyDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new notebook service.
    #[must_use]
    pub const fn new(notes: Arc<N>, agents: Arc<A>, properties: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            notes,
            agents,
            properties,
            clock,
        }
    }

    /// Creates a note record from a submission.
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::Validation`] when the title is blank, the
    /// owning agent does not exist, or a referenced property does not exist,
    /// and a directory error when a store is unavailable.
    pub async fn create(&self, request: CreateNoteRequest) -> NotebookResult<Note> {
        let mut errors = validation::check_create(&request);
        if self.agents.find_by_id(request.agent_id()).await?.is_none() {
            errors.push(FieldError::new("agentId", "Agent not found"));
        }
        if let Some(property_id) = request.property_id()
            && self.properties.find_by_id(property_id).await?.is_none()
        {
            errors.push(FieldError::new("propertyId", "Property not found"));
        }
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let note = Note::new(request.into_details(), self.clock.as_ref());
        self.notes.insert(&note).await?;
        Ok(note)
    }

    /// Patches a note record; `None` when no record has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::Validation`] when a present field fails its
    /// rules or a present property reference does not exist, and a directory
    /// error when a store is unavailable.
    pub async fn update(
        &self,
        id: NoteId,
        request: UpdateNoteRequest,
    ) -> NotebookResult<Option<Note>> {
        let mut errors = validation::check_update(&request);
        if let Some(Some(property_id)) = request.property_id()
            && self.properties.find_by_id(property_id).await?.is_none()
        {
            errors.push(FieldError::new("propertyId", "Property not found"));
        }
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let Some(mut note) = self.notes.find_by_id(id).await? else {
            return Ok(None);
        };
        note.apply(request.into_changes(), self.clock.as_ref());
        self.notes.save(&note).await?;
        Ok(Some(note))
    }

    /// Returns a snapshot of every note record.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn all(&self) -> NotebookResult<Vec<Note>> {
        Ok(self.notes.all().await?)
    }

    /// Finds a note record by identifier; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_id(&self, id: NoteId) -> NotebookResult<Option<Note>> {
        Ok(self.notes.find_by_id(id).await?)
    }

    /// Returns every note owned by the given agent.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_agent(&self, agent_id: AgentId) -> NotebookResult<Vec<Note>> {
        Ok(self.notes.find_by_agent(agent_id).await?)
    }

    /// Returns every note referencing the given property.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_property(&self, property_id: PropertyId) -> NotebookResult<Vec<Note>> {
        Ok(self.notes.find_by_property(property_id).await?)
    }

    /// Deletes a note record, reporting whether one existed.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn delete(&self, id: NoteId) -> NotebookResult<bool> {
        Ok(self.notes.delete(id).await?)
    }
}
