//! Transport Errors

use thiserror::Error;

/// Common result type for collection requests
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a request to the collection endpoint failed
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, body or decoding failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },
}
