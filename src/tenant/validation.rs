//! Field rules for tenant submissions.
//!
//! Names are required; email and phone are optional but must be well-formed
//! when supplied with a non-blank value. Family existence is checked by the
//! registry service.

use crate::tenant::services::{CreateTenantRequest, UpdateTenantRequest};
use crate::validation::{FieldError, has_text, is_email, is_phone};

/// Field checks for a creation submission.
#[must_use]
pub fn check_create(request: &CreateTenantRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !has_text(request.first_name()) {
        errors.push(FieldError::new(
            "firstName",
            "First name is required and must be a non-empty string",
        ));
    }
    if !has_text(request.last_name()) {
        errors.push(FieldError::new(
            "lastName",
            "Last name is required and must be a non-empty string",
        ));
    }
    check_optional_contact(request.email(), request.phone(), &mut errors);
    errors
}

/// Field checks for a patch submission.
#[must_use]
pub fn check_update(request: &UpdateTenantRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(first_name) = request.first_name()
        && !has_text(first_name)
    {
        errors.push(FieldError::new(
            "firstName",
            "First name must be a non-empty string",
        ));
    }
    if let Some(last_name) = request.last_name()
        && !has_text(last_name)
    {
        errors.push(FieldError::new(
            "lastName",
            "Last name must be a non-empty string",
        ));
    }
    check_optional_contact(
        request.email().flatten(),
        request.phone().flatten(),
        &mut errors,
    );
    errors
}

/// Checks supplied, non-empty contact details. Empty values are treated as
/// absent and cleared during normalisation instead.
fn check_optional_contact(
    email: Option<&str>,
    phone: Option<&str>,
    errors: &mut Vec<FieldError>,
) {
    if let Some(value) = email.filter(|value| !value.is_empty())
        && !is_email(value)
    {
        errors.push(FieldError::new(
            "email",
            "Email must be a valid email address",
        ));
    }
    if let Some(value) = phone.filter(|value| !value.is_empty())
        && !is_phone(value)
    {
        errors.push(FieldError::new(
            "phone",
            "Phone must be a valid phone number (7-15 digits)",
        ));
    }
}
