//! Field rules shared by the record contexts.
//!
//! Each rule is a pure predicate over a submitted field value. Contexts
//! collect failed checks as field/message pairs instead of returning them one
//! at a time, so a caller sees every problem with a submission at once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest number of digits accepted in a phone number.
const PHONE_MIN_DIGITS: usize = 7;

/// Largest number of digits accepted in a phone number.
const PHONE_MAX_DIGITS: usize = 15;

/// A single failed check, keyed by the wire-format field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the wire-format name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failed check for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wraps a non-empty list of failed checks.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// Returns the failed checks in submission order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns the names of the offending fields, in submission order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(FieldError::field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Reports whether the value contains non-whitespace text.
#[must_use]
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Reports whether the value looks like an email address: a local part and a
/// domain separated by a single `@`, no whitespace anywhere, and a dot inside
/// the domain with text on both sides.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

/// Reports whether the value is a plausible phone number: digits plus
/// spaces, dashes, plus signs, and parentheses, carrying 7 to 15 digits.
#[must_use]
pub fn is_phone(value: &str) -> bool {
    let allowed = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    allowed && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}
