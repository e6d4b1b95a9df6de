use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::UserError;
use super::password::Password;
use super::validation::validate;
use crate::config::PASSWORD_HASH_COST;
use crate::response::Cause;
use crate::role::Role;

/// Registration payload as received from a client
///
/// Missing keys deserialize as empty strings so they fail the same rules an
/// empty value would.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Input {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Identity metadata assigned by the persistence layer
///
/// Empty for a user that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-delete marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecordMetadata {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A user account
///
/// Built from an [`Input`] by [`User::new`], which holds the password as
/// plaintext until [`User::generate_hash`] runs. Users handed back by the store
/// carry their hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub metadata: RecordMetadata,
    pub name: String,
    pub email: String,
    password: Password,
    role: Role,
}

impl User {
    /// Validate `input` and build a user from it
    ///
    /// Every rule is evaluated; on failure all causes come back in rule order.
    pub fn new(input: Input) -> Result<Self, Vec<Cause>> {
        let role = validate(&input).inspect_err(|causes| {
            tracing::debug!("Rejected user input with {} causes", causes.len());
        })?;

        Ok(Self {
            metadata: RecordMetadata::default(),
            name: input.name,
            email: input.email,
            password: Password::Plaintext(input.password),
            role,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Replace the plaintext password with a bcrypt hash at the configured cost
    ///
    /// Fails with [`UserError::AlreadyHashed`] if the password was hashed
    /// before; the stored hash is left untouched in that case.
    pub fn generate_hash(&mut self) -> Result<(), UserError> {
        self.generate_hash_with_cost(*PASSWORD_HASH_COST)
    }

    /// Same as [`User::generate_hash`] with an explicit bcrypt cost
    pub fn generate_hash_with_cost(&mut self, cost: u32) -> Result<(), UserError> {
        self.password = self.password.hash(cost)?;
        tracing::debug!("Generated password hash with cost {}", cost);
        Ok(())
    }

    /// Check a candidate password against the stored hash
    pub fn validate_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }
}
