use thiserror::Error;

/// One variant per failure class of a quota fetch, so callers can decide
/// how (or whether) to report each kind.
#[derive(Debug, Error)]
pub enum QuotaError {
    /// The request could not be sent or did not complete (DNS, connect,
    /// TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("failed to fetch quotas: {message}")]
    Upstream {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed quota response: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuotaError>;
