//! Service layer for the family ledger.

use crate::family::{
    domain::{Family, FamilyChanges, FamilyId, NewFamily},
    ports::{FamilyDirectory, FamilyDirectoryError},
    validation,
};
use crate::property::{
    domain::PropertyId,
    ports::{PropertyDirectory, PropertyDirectoryError},
};
use crate::validation::{FieldError, ValidationErrors};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a family record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFamilyRequest {
    name: String,
    property_id: PropertyId,
}

impl CreateFamilyRequest {
    /// Creates a request from raw submission fields.
    #[must_use]
    pub fn new(name: impl Into<String>, property_id: PropertyId) -> Self {
        Self {
            name: name.into(),
            property_id,
        }
    }

    /// Submitted household name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Submitted property.
    #[must_use]
    pub const fn property_id(&self) -> PropertyId {
        self.property_id
    }

    fn into_details(self) -> NewFamily {
        NewFamily {
            name: self.name.trim().to_owned(),
            property_id: self.property_id,
        }
    }
}

/// Request payload for patching a family record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFamilyRequest {
    name: Option<String>,
    property_id: Option<PropertyId>,
}

impl UpdateFamilyRequest {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            property_id: None,
        }
    }

    /// Sets the replacement household name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement property.
    #[must_use]
    pub const fn with_property(mut self, property_id: PropertyId) -> Self {
        self.property_id = Some(property_id);
        self
    }

    /// Submitted replacement name, when present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Submitted replacement property, when present.
    #[must_use]
    pub const fn property_id(&self) -> Option<PropertyId> {
        self.property_id
    }

    fn into_changes(self) -> FamilyChanges {
        FamilyChanges {
            name: self.name.map(|value| value.trim().to_owned()),
            property_id: self.property_id,
        }
    }
}

/// Service-level errors for family ledger operations.
#[derive(Debug, Error)]
pub enum FamilyLedgerError {
    /// A submission failed field validation, referenced a missing property,
    /// or targeted an occupied property.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Family directory operation failed.
    #[error(transparent)]
    Families(#[from] FamilyDirectoryError),
    /// Property directory operation failed while checking a reference.
    #[error(transparent)]
    Properties(#[from] PropertyDirectoryError),
}

/// Result type for family ledger operations.
pub type FamilyLedgerResult<T> = Result<T, FamilyLedgerError>;

/// Family ledger orchestration service.
///
/// Enforces one family per property: a submission referencing an occupied
/// property is rejected, except when the occupant is the family being
/// updated.
#[derive(Clone)]
pub struct FamilyLedgerService<F, P, C>
where
    F: FamilyDirectory,
    P: PropertyDirectory,
    C: Clock + Send + Sync,
{
    families: Arc<F>,
    properties: Arc<P>,
    clock: Arc<C>,
}

impl<F, P, C> FamilyLedgerService<F, P, C>
where
    F: FamilyDirectory,
    P: PropertyDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new ledger service.
    #[must_use]
    pub const fn new(families: Arc<F>, properties: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            families,
            properties,
            clock,
        }
    }

    /// Creates a family record from a submission.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyLedgerError::Validation`] when the name is blank, the
    /// property does not exist, or the property already has a family
    /// assigned, and a directory error when a store is unavailable.
    pub async fn create(&self, request: CreateFamilyRequest) -> FamilyLedgerResult<Family> {
        let mut errors = validation::check_create(&request);
        self.check_property(request.property_id(), None, &mut errors)
            .await?;
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let family = Family::new(request.into_details(), self.clock.as_ref());
        self.families.insert(&family).await?;
        Ok(family)
    }

    /// Patches a family record; `None` when no record has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyLedgerError::Validation`] when a present field fails
    /// its rules or a present property reference is missing or occupied by
    /// another family, and a directory error when a store is unavailable.
    pub async fn update(
        &self,
        id: FamilyId,
        request: UpdateFamilyRequest,
    ) -> FamilyLedgerResult<Option<Family>> {
        let mut errors = validation::check_update(&request);
        if let Some(property_id) = request.property_id() {
            self.check_property(property_id, Some(id), &mut errors)
                .await?;
        }
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let Some(mut family) = self.families.find_by_id(id).await? else {
            return Ok(None);
        };
        family.apply(request.into_changes(), self.clock.as_ref());
        self.families.save(&family).await?;
        Ok(Some(family))
    }

    /// Returns a snapshot of every family record.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn all(&self) -> FamilyLedgerResult<Vec<Family>> {
        Ok(self.families.all().await?)
    }

    /// Finds a family record by identifier; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_id(&self, id: FamilyId) -> FamilyLedgerResult<Option<Family>> {
        Ok(self.families.find_by_id(id).await?)
    }

    /// Finds the family occupying the given property, if any.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_property(
        &self,
        property_id: PropertyId,
    ) -> FamilyLedgerResult<Option<Family>> {
        Ok(self.families.find_by_property(property_id).await?)
    }

    /// Deletes a family record, reporting whether one existed.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn delete(&self, id: FamilyId) -> FamilyLedgerResult<bool> {
        Ok(self.families.delete(id).await?)
    }

    /// Appends existence and occupancy findings for a property reference.
    async fn check_property(
        &self,
        property_id: PropertyId,
        exclude: Option<FamilyId>,
        errors: &mut Vec<FieldError>,
    ) -> FamilyLedgerResult<()> {
        if self.properties.find_by_id(property_id).await?.is_none() {
            errors.push(FieldError::new("propertyId", "Property not found"));
        } else if self
            .families
            .is_property_occupied(property_id, exclude)
            .await?
        {
            errors.push(FieldError::new(
                "propertyId",
                "Property already has a family assigned",
            ));
        }
        Ok(())
    }
}
