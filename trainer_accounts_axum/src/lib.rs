//! trainer_accounts_axum - Axum integration for trainer-accounts
//!
//! Renders [`trainer_accounts::ErrorEnvelope`] values as axum responses and
//! provides extractors that validate registration payloads at the edge.

mod config;
mod error;
mod extractor;

pub use config::{INVALID_CREDENTIALS_MESSAGE, INVALID_USER_MESSAGE};
pub use error::{IntoResponseError, Problem, authenticate};
pub use extractor::{RequestPath, ValidatedUser};
