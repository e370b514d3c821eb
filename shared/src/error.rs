//! Failures of a single round-trip to the backend.
//!
//! Callers never branch on the variant: any error means "the operation did
//! not succeed". The detail is kept for logging only.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Machine-readable code, used as a structured logging field.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "NETWORK_ERROR",
            ApiError::Status(_) => "HTTP_ERROR",
            ApiError::Encode(_) => "SERIALIZE_ERROR",
            ApiError::Decode(_) => "PARSE_ERROR",
        }
    }
}
