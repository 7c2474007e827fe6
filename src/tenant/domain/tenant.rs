//! Tenant aggregate root and its input types.

use super::TenantId;
use crate::family::domain::FamilyId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A tenant belonging to a family.
///
/// Email and phone are optional contact details stored as `None` when the
/// tenant has not supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    id: TenantId,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    family_id: FamilyId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Trusted input for creating a tenant record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email, when supplied.
    pub email: Option<String>,
    /// Contact phone, when supplied.
    pub phone: Option<String>,
    /// Household the tenant belongs to.
    pub family_id: FamilyId,
}

/// Patch for a tenant record.
///
/// The outer `Option` on `email` and `phone` marks field presence; the inner
/// one distinguishes a replacement value from an explicit clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantChanges {
    /// Replacement given name, when present.
    pub first_name: Option<String>,
    /// Replacement family name, when present.
    pub last_name: Option<String>,
    /// Replacement or cleared contact email, when present.
    pub email: Option<Option<String>>,
    /// Replacement or cleared contact phone, when present.
    pub phone: Option<Option<String>>,
    /// Replacement household, when present.
    pub family_id: Option<FamilyId>,
}

impl Tenant {
    /// Creates a record with a fresh identifier and matching timestamps.
    #[must_use]
    pub fn new(details: NewTenant, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TenantId::new(),
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone: details.phone,
            family_id: details.family_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TenantId {
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

    /// Returns the contact email, when supplied.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the contact phone, when supplied.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the household the tenant belongs to.
    #[must_use]
    pub const fn family_id(&self) -> FamilyId {
        self.family_id
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
    pub fn apply(&mut self, changes: TenantChanges, clock: &impl Clock) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if let Some(family_id) = changes.family_id {
            self.family_id = family_id;
        }
        self.updated_at = clock.utc();
    }
}
