//! Field rules for note submissions.
//!
//! Agent and property existence are checked by the notebook service.

use crate::note::services::{CreateNoteRequest, UpdateNoteRequest};
use crate::validation::{FieldError, has_text};

/// Field checks for a creation submission.
#[must_use]
pub fn check_create(request: &CreateNoteRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !has_text(request.title()) {
        errors.push(FieldError::new(
            "title",
            "Title is required and must be a non-empty string",
        ));
    }
    errors
}

/// Field checks for a patch submission.
#[must_use]
pub fn check_update(request: &UpdateNoteRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(title) = request.title()
        && !has_text(title)
    {
        errors.push(FieldError::new("title", "Title must be a non-empty string"));
    }
    errors
}
