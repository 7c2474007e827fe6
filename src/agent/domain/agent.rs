//! Agent aggregate root and its input types.

use super::AgentId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A real-estate agent record.
///
/// Contact fields are free text; trimming and email lowercasing are the
/// service layer's responsibility and have already happened by the time a
/// value reaches this type. The record owns its timestamps: `created_at` is
/// fixed at construction and `updated_at` moves on every applied patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    id: AgentId,
    first_name: String,
    last_name: String,
    email: String,
    mobile_number: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Trusted input for creating an agent record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgent {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email, already lowercased.
    pub email: String,
    /// Contact phone number.
    pub mobile_number: String,
}

/// Patch for an agent record.
///
/// A present field overwrites the stored value; an absent field leaves it
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentChanges {
    /// Replacement given name, when present.
    pub first_name: Option<String>,
    /// Replacement family name, when present.
    pub last_name: Option<String>,
    /// Replacement contact email, when present.
    pub email: Option<String>,
    /// Replacement phone number, when present.
    pub mobile_number: Option<String>,
}

impl Agent {
    /// Creates a record with a fresh identifier and matching creation and
    /// update timestamps.
    #[must_use]
    pub fn new(details: NewAgent, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AgentId::new(),
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            mobile_number: details.mobile_number,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
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

    /// Applies a patch, overwriting the present fields and leaving the rest
    /// untouched.
    ///
    /// The update timestamp is refreshed unconditionally, even when the patch
    /// is empty or repeats the stored values.
    pub fn apply(&mut self, changes: AgentChanges, clock: &impl Clock) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(mobile_number) = changes.mobile_number {
            self.mobile_number = mobile_number;
        }
        self.touch(clock);
    }

    /// Moves the update timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
