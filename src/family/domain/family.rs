//! Family aggregate root and its input types.

use super::FamilyId;
use crate::property::domain::PropertyId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A household occupying a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    id: FamilyId,
    name: String,
    property_id: PropertyId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Trusted input for creating a family record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFamily {
    /// Household name.
    pub name: String,
    /// Occupied property.
    pub property_id: PropertyId,
}

/// Patch for a family record; present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyChanges {
    /// Replacement household name, when present.
    pub name: Option<String>,
    /// Replacement occupied property, when present.
    pub property_id: Option<PropertyId>,
}

impl Family {
    /// Creates a record with a fresh identifier and matching timestamps.
    #[must_use]
    pub fn new(details: NewFamily, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: FamilyId::new(),
            name: details.name,
            property_id: details.property_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> FamilyId {
        self.id
    }

    /// Returns the household name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the occupied property.
    #[must_use]
    pub const fn property_id(&self) -> PropertyId {
        self.property_id
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
    pub fn apply(&mut self, changes: FamilyChanges, clock: &impl Clock) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(property_id) = changes.property_id {
            self.property_id = property_id;
        }
        self.updated_at = clock.utc();
    }
}
