use reqwest::StatusCode;
use thiserror::Error;

/// Failure to resolve the expected version from the Version Source
#[derive(Debug, Error)]
pub enum VersionCheckError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure to obtain the control plane's self-reported version
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Control plane unavailable: {0}")]
    Unavailable(String),
}
