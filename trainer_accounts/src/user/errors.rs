use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum UserError {
    /// The hashing primitive rejected its parameters or could not draw a salt
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// The password has already been through the one-way hash
    #[error("Password is already hashed")]
    AlreadyHashed,
}

impl UserError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Hashing(msg) => tracing::error!("Hashing error: {}", msg),
            Self::AlreadyHashed => tracing::error!("Password is already hashed"),
        }
        self
    }
}

impl From<bcrypt::BcryptError> for UserError {
    fn from(err: bcrypt::BcryptError) -> Self {
        let error = Self::Hashing(err.to_string());
        tracing::error!("{}", error);
        error
    }
}
