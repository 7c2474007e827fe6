//! Service layer for the tenant registry.

use crate::family::{
    domain::FamilyId,
    ports::{FamilyDirectory, FamilyDirectoryError},
};
use crate::tenant::{
    domain::{NewTenant, Tenant, TenantChanges, TenantId},
    ports::{TenantDirectory, TenantDirectoryError},
    validation,
};
use crate::validation::{FieldError, ValidationErrors};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a tenant record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTenantRequest {
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    family_id: FamilyId,
}

impl CreateTenantRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        family_id: FamilyId,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            family_id,
        }
    }

    /// Sets the optional contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the optional contact phone.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
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

    /// Submitted contact email, when supplied.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Submitted contact phone, when supplied.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Submitted household.
    #[must_use]
    pub const fn family_id(&self) -> FamilyId {
        self.family_id
    }

    fn into_details(self) -> NewTenant {
        NewTenant {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.and_then(normalise_optional),
            phone: self.phone.and_then(normalise_optional),
            family_id: self.family_id,
        }
    }
}

/// Request payload for patching a tenant record.
///
/// Email and phone are tri-state: absent leaves the stored value, a
/// replacement overwrites it, and an explicit clear removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTenantRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<Option<String>>,
    phone: Option<Option<String>>,
    family_id: Option<FamilyId>,
}

impl UpdateTenantRequest {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            family_id: None,
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

    /// Sets a replacement contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Some(email.into()));
        self
    }

    /// Clears the stored contact email.
    #[must_use]
    pub fn clear_email(mut self) -> Self {
        self.email = Some(None);
        self
    }

    /// Sets a replacement contact phone.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(Some(phone.into()));
        self
    }

    /// Clears the stored contact phone.
    #[must_use]
    pub fn clear_phone(mut self) -> Self {
        self.phone = Some(None);
        self
    }

    /// Sets the replacement household.
    #[must_use]
    pub const fn with_family(mut self, family_id: FamilyId) -> Self {
        self.family_id = Some(family_id);
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

    /// Submitted email change, when present; the inner value is `None` for
    /// an explicit clear.
    #[must_use]
    pub fn email(&self) -> Option<Option<&str>> {
        self.email.as_ref().map(Option::as_deref)
    }

    /// Submitted phone change, when present; the inner value is `None` for
    /// an explicit clear.
    #[must_use]
    pub fn phone(&self) -> Option<Option<&str>> {
        self.phone.as_ref().map(Option::as_deref)
    }

    /// Submitted replacement household, when present.
    #[must_use]
    pub const fn family_id(&self) -> Option<FamilyId> {
        self.family_id
    }

    fn into_changes(self) -> TenantChanges {
        TenantChanges {
            first_name: self.first_name.map(|value| value.trim().to_owned()),
            last_name: self.last_name.map(|value| value.trim().to_owned()),
            email: self.email.map(|inner| inner.and_then(normalise_optional)),
            phone: self.phone.map(|inner| inner.and_then(normalise_optional)),
            family_id: self.family_id,
        }
    }
}

/// Trims an optional contact value, collapsing blank input to `None`.
fn normalise_optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Service-level errors for tenant registry operations.
#[derive(Debug, Error)]
pub enum TenantRegistryError {
    /// A submission failed field validation or referenced a missing family.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Tenant directory operation failed.
    #[error(transparent)]
    Tenants(#[from] TenantDirectoryError),
    /// Family directory operation failed while checking a reference.
    #[error(transparent)]
    Families(#[from] FamilyDirectoryError),
}

/// Result type for tenant registry operations.
pub type TenantRegistryResult<T> = Result<T, TenantRegistryError>;

/// Tenant registry orchestration service.
#[derive(Clone)]
pub struct TenantRegistryService<T, F, C>
where
    T: TenantDirectory,
    F: FamilyDirectory,
    C: Clock + Send + Sync,
{
    tenants: Arc<T>,
    families: Arc<F>,
    clock: Arc<C>,
}

impl<T, F, C> TenantRegistryService<T, F, C>
where
    T: TenantDirectory,
    F: FamilyDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(tenants: Arc<T>, families: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            tenants,
            families,
            clock,
        }
    }

    /// Creates a tenant record from a submission.
    ///
    /// # Errors
    ///
    /// Returns [`TenantRegistryError::Validation`] when a field fails its
    /// rules or the family does not exist, and a directory error when a
    /// store is unavailable.
    pub async fn create(&self, request: CreateTenantRequest) -> TenantRegistryResult<Tenant> {
        let mut errors = validation::check_create(&request);
        if self.families.find_by_id(request.family_id()).await?.is_none() {
            errors.push(FieldError::new("familyId", "Family not found"));
        }
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let tenant = Tenant::new(request.into_details(), self.clock.as_ref());
        self.tenants.insert(&tenant).await?;
        Ok(tenant)
    }

    /// Patches a tenant record; `None` when no record has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TenantRegistryError::Validation`] when a present field
    /// fails its rules or a present family reference does not exist, and a
    /// directory error when a store is unavailable.
    pub async fn update(
        &self,
        id: TenantId,
        request: UpdateTenantRequest,
    ) -> TenantRegistryResult<Option<Tenant>> {
        let mut errors = validation::check_update(&request);
        if let Some(family_id) = request.family_id()
            && self.families.find_by_id(family_id).await?.is_none()
        {
            errors.push(FieldError::new("familyId", "Family not found"));
        }
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into());
        }

        let Some(mut tenant) = self.tenants.find_by_id(id).await? else {
            return Ok(None);
        };
        tenant.apply(request.into_changes(), self.clock.as_ref());
        self.tenants.save(&tenant).await?;
        Ok(Some(tenant))
    }

    /// Returns a snapshot of every tenant record.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn all(&self) -> TenantRegistryResult<Vec<Tenant>> {
        Ok(self.tenants.all().await?)
    }

    /// Finds a tenant record by identifier; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_id(&self, id: TenantId) -> TenantRegistryResult<Option<Tenant>> {
        Ok(self.tenants.find_by_id(id).await?)
    }

    /// Returns every tenant in the given family.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn find_by_family(&self, family_id: FamilyId) -> TenantRegistryResult<Vec<Tenant>> {
        Ok(self.tenants.find_by_family(family_id).await?)
    }

    /// Deletes a tenant record, reporting whether one existed.
    ///
    /// # Errors
    ///
    /// Returns a directory error when the store is unavailable.
    pub async fn delete(&self, id: TenantId) -> TenantRegistryResult<bool> {
        Ok(self.tenants.delete(id).await?)
    }
}
