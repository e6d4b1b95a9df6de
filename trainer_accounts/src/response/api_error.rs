use thiserror::Error;

use super::types::{Cause, ErrorEnvelope};

/// Failure kinds the HTTP boundary reports to clients
///
/// Carries only the payload each envelope needs; the request path is supplied
/// when the error is turned into an [`ErrorEnvelope`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {message} ({} causes)", .causes.len())]
    Validation { message: String, causes: Vec<Cause> },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>, causes: Vec<Cause>) -> Self {
        Self::Validation {
            message: message.into(),
            causes,
        }
    }

    /// Build the envelope for the request at `path`
    pub fn into_envelope(self, path: impl Into<String>) -> ErrorEnvelope {
        match self {
            Self::BadRequest(message) => ErrorEnvelope::bad_request(message, path),
            Self::Validation { message, causes } => {
                ErrorEnvelope::bad_request_validation(message, causes, path)
            }
            Self::Unauthorized(message) => ErrorEnvelope::unauthorized(message, path),
            Self::NotFound(message) => ErrorEnvelope::not_found(message, path),
        }
    }
}
