//! Domain-specific error types and error handling.

use thiserror::Error;

/// Failures talking to the verification provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider URL could not be built
    #[error("invalid provider URL: {0}")]
    InvalidUrl(String),

    /// Network failure or timeout before a response arrived
    #[error("{0}")]
    Transport(String),

    /// The provider answered with a non-2xx status
    #[error("got wrong status code: {0}")]
    Status(u16),
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider answered 2xx but the body is not a verification object
    #[error("{0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The provider checked the code and rejected it
    #[error("not valid")]
    CodeNotValid,
}

impl DomainError {
    /// Short machine-readable name, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Provider(ProviderError::InvalidUrl(_)) => "invalid_url",
            DomainError::Provider(ProviderError::Transport(_)) => "transport",
            DomainError::Provider(ProviderError::Status(_)) => "provider_status",
            DomainError::MalformedResponse(_) => "malformed_response",
            DomainError::CodeNotValid => "code_not_valid",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
