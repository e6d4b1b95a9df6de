use axum::response::{IntoResponse, Response};
use http::StatusCode;
use trainer_accounts::{ErrorEnvelope, User, UserError};

use super::config::INVALID_CREDENTIALS_MESSAGE;
use super::extractor::RequestPath;

/// An [`ErrorEnvelope`] ready to be returned from a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem(pub ErrorEnvelope);

impl From<ErrorEnvelope> for Problem {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self(envelope)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        match self.0.render_json() {
            Ok(response) => response.into_response(),
            Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

/// Check `candidate` against the user's stored hash
///
/// A mismatch becomes a 401 envelope for the current request path.
pub fn authenticate(user: &User, candidate: &str, path: &RequestPath) -> Result<(), Problem> {
    if user.validate_password(candidate) {
        return Ok(());
    }

    tracing::debug!("Password check failed for {}", path.as_str());
    Err(Problem(ErrorEnvelope::unauthorized(
        INVALID_CREDENTIALS_MESSAGE.as_str(),
        path.as_str(),
    )))
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Hashing failures are internal; clients only see a generic 500
impl<T> IntoResponseError<T> for Result<T, UserError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.log().to_string()))
    }
}
