//! Success/error envelope vocabulary for hosts.
//!
//! The crate itself never speaks HTTP; these types give a host the recorded
//! wire shapes, `{success, data, message}` on the happy path and
//! `{success: false, error: {code, message}}` on failures, without
//! re-inventing the taxonomy per deployment.

use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Default message used when an agent lookup misses.
pub const AGENT_NOT_FOUND_MESSAGE: &str = "Property Agent with the given ID does not exist";

/// Machine-readable error codes understood by the recorded clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A submission failed field validation.
    ValidationError,
    /// The requested agent record does not exist.
    AgentNotFound,
    /// The caller exceeded the host's request budget.
    RateLimitExceeded,
    /// An unexpected failure inside the host.
    InternalError,
}

/// Coded error payload carried by failure envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: ErrorCode,
    /// Human-readable failure description.
    pub message: String,
}

/// Response envelope shared by every host endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// Successful outcome carrying a payload.
    Success {
        /// Always `true`.
        success: bool,
        /// Response payload.
        data: T,
        /// Optional human-readable remark.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Failed outcome carrying a coded error.
    Failure {
        /// Always `false`.
        success: bool,
        /// Coded error body.
        error: ErrorBody,
    },
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self::Success {
            success: true,
            data,
            message: None,
        }
    }

    /// Wraps a payload in a success envelope with a remark.
    #[must_use]
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            success: true,
            data,
            message: Some(message.into()),
        }
    }

    /// Builds a failure envelope from a code and message.
    #[must_use]
    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Failure {
            success: false,
            error: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }

    /// Builds the stock agent-not-found failure envelope.
    #[must_use]
    pub fn not_found() -> Self {
        Self::failure(ErrorCode::AgentNotFound, AGENT_NOT_FOUND_MESSAGE)
    }

    /// Builds a validation-failure envelope from collected field errors.
    #[must_use]
    pub fn validation_failure(errors: &ValidationErrors) -> Self {
        Self::failure(ErrorCode::ValidationError, errors.to_string())
    }
}
