use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of roles a user account can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Coach,
    Student,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error("Invalid role: {0}")]
    Invalid(String),
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Coach, Self::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Coach => "coach",
            Self::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    /// Exact, case-sensitive match against the wire values; no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "coach" => Ok(Self::Coach),
            "student" => Ok(Self::Student),
            _ => Err(RoleError::Invalid(s.to_string())),
        }
    }
}

/// Returns true iff `value` is exactly one of the role wire values
pub fn is_valid_role(value: &str) -> bool {
    value.parse::<Role>().is_ok()
}
