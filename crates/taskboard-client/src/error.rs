use thiserror::Error;

/// A request to the task server did not succeed.
///
/// Every variant is a transport-level failure from the cache's point of view:
/// the cached state is left untouched and the caller decides how to report it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// server's `{"error": ...}` text when present.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// A success response carried a body that is not a valid task payload.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured server URL cannot be used as a base for task paths.
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of a [`ClientError::Status`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_invalid_input(&self) -> bool {
        self.status() == Some(400)
    }
}
