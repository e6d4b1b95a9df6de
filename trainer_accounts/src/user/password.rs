use serde::{Deserialize, Serialize, Serializer};

use super::errors::UserError;

/// Stored credential, either still plaintext or already bcrypt-hashed
///
/// A password only moves from `Plaintext` to `Hashed`. Deserialized values are
/// always `Hashed`, since only the store hands users back to this crate.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Password {
    Plaintext(String),
    Hashed(String),
}

impl Password {
    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Plaintext(value) | Self::Hashed(value) => value,
        }
    }

    /// Hash the plaintext with a fresh salt at `cost`
    ///
    /// Passwords past bcrypt's 72-byte input limit are refused rather than
    /// truncated.
    pub(super) fn hash(&self, cost: u32) -> Result<Self, UserError> {
        match self {
            Self::Plaintext(plain) => Ok(Self::Hashed(bcrypt::non_truncating_hash(plain, cost)?)),
            Self::Hashed(_) => Err(UserError::AlreadyHashed),
        }
    }

    /// Check `candidate` against the stored hash
    ///
    /// False on mismatch, on a malformed hash, on a candidate too long to have
    /// been hashed, and while still plaintext.
    pub(super) fn verify(&self, candidate: &str) -> bool {
        match self {
            Self::Hashed(hash) => bcrypt::non_truncating_verify(candidate, hash).unwrap_or(false),
            Self::Plaintext(_) => false,
        }
    }
}

impl From<String> for Password {
    fn from(hash: String) -> Self {
        Self::Hashed(hash)
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plaintext(_) => f.write_str("Plaintext(<redacted>)"),
            Self::Hashed(_) => f.write_str("Hashed(<redacted>)"),
        }
    }
}
