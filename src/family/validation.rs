//! Field rules for family submissions.
//!
//! Property existence and occupancy are checked by the ledger service.

use crate::family::services::{CreateFamilyRequest, UpdateFamilyRequest};
use crate::validation::{FieldError, has_text};

/// Field checks for a creation submission.
#[must_use]
pub fn check_create(request: &CreateFamilyRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !has_text(request.name()) {
        errors.push(FieldError::new(
            "name",
            "Name is required and must be a non-empty string",
        ));
    }
    errors
}

/// Field checks for a patch submission.
#[must_use]
pub fn check_update(request: &UpdateFamilyRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(name) = request.name()
        && !has_text(name)
    {
        errors.push(FieldError::new("name", "Name must be a non-empty string"));
    }
    errors
}
