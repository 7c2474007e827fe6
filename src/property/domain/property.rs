//! Property aggregate root and its input types.

use super::PropertyId;
use crate::agent::domain::AgentId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A property under management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    id: PropertyId,
    address: String,
    agent_id: AgentId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Trusted input for creating a property record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProperty {
    /// Street address.
    pub address: String,
    /// Managing agent.
    pub agent_id: AgentId,
}

/// Patch for a property record; present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyChanges {
    /// Replacement address, when present.
    pub address: Option<String>,
    /// Replacement managing agent, when present.
    pub agent_id: Option<AgentId>,
}

impl Property {
    /// Creates a record with a fresh identifier and matching timestamps.
    #[must_use]
    pub fn new(details: NewProperty, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: PropertyId::new(),
            address: details.address,
            agent_id: details.agent_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> PropertyId {
        self.id
    }

    /// Returns the street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the managing agent.
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
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
    pub fn apply(&mut self, changes: PropertyChanges, clock: &impl Clock) {
        if let Some(address) = changes.address {
            self.address = address;
        }
        if let Some(agent_id) = changes.agent_id {
            self.agent_id = agent_id;
        }
        self.updated_at = clock.utc();
    }
}
