//! Note aggregate root and its input types.

use super::NoteId;
use crate::agent::domain::AgentId;
use crate::property::domain::PropertyId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A note or reminder kept by an agent.
///
/// Content, property reference, and due date are all optional; a note with a
/// due date and the reminder flag set shows up in follow-up views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    content: Option<String>,
    agent_id: AgentId,
    property_id: Option<PropertyId>,
    due_date: Option<DateTime<Utc>>,
    is_reminder: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Trusted input for creating a note record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    /// Note title.
    pub title: String,
    /// Body text, when supplied.
    pub content: Option<String>,
    /// Owning agent.
    pub agent_id: AgentId,
    /// Referenced property, when any.
    pub property_id: Option<PropertyId>,
    /// Follow-up instant, when any.
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the note is a reminder.
    pub is_reminder: bool,
}

/// Patch for a note record.
///
/// The outer `Option` on nullable fields marks presence; the inner one
/// distinguishes a replacement value from an explicit clear. The owning
/// agent cannot be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    /// Replacement title, when present.
    pub title: Option<String>,
    /// Replacement or cleared body text, when present.
    pub content: Option<Option<String>>,
    /// Replacement or cleared property reference, when present.
    pub property_id: Option<Option<PropertyId>>,
    /// Replacement or cleared follow-up instant, when present.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement reminder flag, when present.
    pub is_reminder: Option<bool>,
}

impl Note {
    /// Creates a record with a fresh identifier and matching timestamps.
    #[must_use]
    pub fn new(details: NewNote, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: NoteId::new(),
            title: details.title,
            content: details.content,
            agent_id: details.agent_id,
            property_id: details.property_id,
            due_date: details.due_date,
            is_reminder: details.is_reminder,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text, when supplied.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the owning agent.
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    /// Returns the referenced property, when any.
    #[must_use]
    pub const fn property_id(&self) -> Option<PropertyId> {
        self.property_id
    }

    /// Returns the follow-up instant, when any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Reports whether the note is a reminder.
    #[must_use]
    pub const fn is_reminder(&self) -> bool {
        self.is_reminder
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a patch and refreshes the update timestamp unconditionally.
    pub fn apply(&mut self, changes: NoteChanges, clock: &impl Clock) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(property_id) = changes.property_id {
            self.property_id = property_id;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if let Some(is_reminder) = changes.is_reminder {
            self.is_reminder = is_reminder;
        }
        self.updated_at = clock.utc();
    }
}
