//! In-memory note directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::agent::domain::AgentId;
use crate::note::{
    domain::{Note, NoteId},
    ports::{NoteDirectory, NoteDirectoryError, NoteDirectoryResult},
};
use crate::property::domain::PropertyId;

/// Thread-safe in-memory note directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteDirectory {
    state: Arc<RwLock<HashMap<NoteId, Note>>>,
}

impl InMemoryNoteDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteDirectory for InMemoryNoteDirectory {
    async fn insert(&self, note: &Note) -> NoteDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            NoteDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&note.id()) {
            return Err(NoteDirectoryError::DuplicateNote(note.id()));
        }
        state.insert(note.id(), note.clone());
        Ok(())
    }

    async fn save(&self, note: &Note) -> NoteDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            NoteDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&note.id()) {
            return Err(NoteDirectoryError::NotFound(note.id()));
        }
        state.insert(note.id(), note.clone());
        Ok(())
    }

    async fn all(&self) -> NoteDirectoryResult<Vec<Note>> {
        let state = self.state.read().map_err(|err| {
            NoteDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: NoteId) -> NoteDirectoryResult<Option<Note>> {
        let state = self.state.read().map_err(|err| {
            NoteDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_agent(&self, agent_id: AgentId) -> NoteDirectoryResult<Vec<Note>> {
        let state = self.state.read().map_err(|err| {
            NoteDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .values()
            .filter(|note| note.agent_id() == agent_id)
            .cloned()
            .collect())
    }

    async fn find_by_property(&self, property_id: PropertyId) -> NoteDirectoryResult<Vec<Note>> {
        let state = self.state.read().map_err(|err| {
            NoteDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .values()
            .filter(|note| note.property_id() == Some(property_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: NoteId) -> NoteDirectoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            NoteDirectoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(&id).is_some())
    }
}
