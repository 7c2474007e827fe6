//! Field rules for property submissions.
//!
//! Existence of the referenced agent is checked by the catalog service,
//! which appends its findings to the field checks collected here.

use crate::property::services::{CreatePropertyRequest, UpdatePropertyRequest};
use crate::validation::{FieldError, has_text};

/// Field checks for a creation submission.
#[must_use]
pub fn check_create(request: &CreatePropertyRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !has_text(request.address()) {
        errors.push(FieldError::new(
            "address",
            "Address is required and must be a non-empty string",
        ));
    }
    errors
}

/// Field checks for a patch submission.
#[must_use]
pub fn check_update(request: &UpdatePropertyRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(address) = request.address()
        && !has_text(address)
    {
        errors.push(FieldError::new(
            "address",
            "Address must be a non-empty string",
        ));
    }
    errors
}
