//! Error types for the platform client.

/// Platform client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Missing or invalid connection settings.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Transport-level failure (connect, TLS, body read).
    #[error("network error: {message}")]
    Network { message: String },

    /// The platform answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The platform answered 2xx but the body could not be understood.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ClientError {
    /// HTTP status carried by the error, if the platform answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Diagnostic response body for status errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for platform client operations.
pub type ClientResult<T> = Result<T, ClientError>;
