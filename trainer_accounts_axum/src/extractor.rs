use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, OriginalUri, Request},
};
use http::{Extensions, Uri, request::Parts};
use trainer_accounts::{ApiError, ErrorEnvelope, Input, User};

use super::config::INVALID_USER_MESSAGE;
use super::error::Problem;

/// Path of the current request, used as the envelope `instance`
///
/// Prefers the path before any router nesting stripped a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath(pub String);

impl RequestPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_uri(uri: &Uri, extensions: &Extensions) -> Self {
        let path = extensions
            .get::<OriginalUri>()
            .map(|original| original.0.path())
            .unwrap_or_else(|| uri.path());
        Self(path.to_string())
    }
}

impl<S> FromRequestParts<S> for RequestPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri, &parts.extensions))
    }
}

/// A user built from a JSON registration body that passed every rule
///
/// Rejects malformed bodies with a 400 bad-request envelope and invalid input
/// with a 400 validation envelope listing every cause. The password is still
/// plaintext; hash it before handing the user to storage.
#[derive(Debug)]
pub struct ValidatedUser(pub User);

impl<S> FromRequest<S> for ValidatedUser
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = RequestPath::from_uri(req.uri(), req.extensions());

        let Json(input) = Json::<Input>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Malformed user payload: {}", rejection.body_text());
                Problem(ErrorEnvelope::bad_request(
                    rejection.body_text(),
                    path.as_str(),
                ))
            })?;

        let user = User::new(input).map_err(|causes| {
            Problem(
                ApiError::validation(INVALID_USER_MESSAGE.as_str(), causes)
                    .into_envelope(path.as_str()),
            )
        })?;

        Ok(Self(user))
    }
}
