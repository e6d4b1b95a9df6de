use thiserror::Error;

/// Errors that can occur while rendering an error envelope
#[derive(Debug, Error)]
pub enum RenderError {
    /// The envelope could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The HTTP response could not be assembled
    #[error("HTTP error: {0}")]
    Http(String),
}

impl RenderError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Serialize(msg) => tracing::error!("Serialization error: {}", msg),
            Self::Http(msg) => tracing::error!("HTTP error: {}", msg),
        }
        self
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        let error = Self::Serialize(err.to_string());
        tracing::error!("{}", error);
        error
    }
}

impl From<http::Error> for RenderError {
    fn from(err: http::Error) -> Self {
        let error = Self::Http(err.to_string());
        tracing::error!("{}", error);
        error
    }
}
