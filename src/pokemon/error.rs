use thiserror::Error;

/// Errors produced by a pokemon fetcher.
///
/// `Clone` because a failed resource hands the same error to every reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered but knows no pokemon by that name.
    #[error("No pokemon with the name \"{name}\"")]
    NotFound { name: String },

    /// The request never produced a response.
    #[error("Request to '{endpoint}' failed: {message}")]
    Network { endpoint: String, message: String },

    /// The API answered with a non-success status.
    #[error("Upstream error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Failure injected into the offline fetcher.
    #[error("{0}")]
    Injected(String),
}

impl FetchError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => "not_found",
            FetchError::Network { .. } => "network",
            FetchError::Status { .. } => "status",
            FetchError::InvalidResponse(_) => "invalid_response",
            FetchError::Injected(_) => "injected",
        }
    }
}
