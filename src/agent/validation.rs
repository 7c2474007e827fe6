//! Field rules for agent submissions.
//!
//! Every field of a creation request is required; patch requests check only
//! the fields they carry. Rules run on the raw submission, before the
//! service layer trims or lowercases anything.

use crate::agent::services::{CreateAgentRequest, UpdateAgentRequest};
use crate::validation::{FieldError, ValidationErrors, has_text, is_email, is_phone};

/// Validates a creation submission.
///
/// # Errors
///
/// Returns every failed field check.
pub fn validate_create(request: &CreateAgentRequest) -> Result<(), ValidationErrors> {
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
    if !has_text(request.email()) {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_email(request.email()) {
        errors.push(FieldError::new(
            "email",
            "Email must be a valid email address",
        ));
    }
    if !has_text(request.mobile_number()) {
        errors.push(FieldError::new("mobileNumber", "Mobile number is required"));
    } else if !is_phone(request.mobile_number()) {
        errors.push(FieldError::new(
            "mobileNumber",
            "Mobile number must be a valid phone number (7-15 digits)",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

/// Validates a patch submission, checking only the fields it carries.
///
/// # Errors
///
/// Returns every failed field check.
pub fn validate_update(request: &UpdateAgentRequest) -> Result<(), ValidationErrors> {
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
    if let Some(email) = request.email() {
        if !has_text(email) {
            errors.push(FieldError::new("email", "Email must be a non-empty string"));
        } else if !is_email(email) {
            errors.push(FieldError::new(
                "email",
                "Email must be a valid email address",
            ));
        }
    }
    if let Some(mobile_number) = request.mobile_number() {
        if !has_text(mobile_number) {
            errors.push(FieldError::new(
                "mobileNumber",
                "Mobile number must be a non-empty string",
            ));
        } else if !is_phone(mobile_number) {
            errors.push(FieldError::new(
                "mobileNumber",
                "Mobile number must be a valid phone number (7-15 digits)",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}
