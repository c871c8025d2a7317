//! # Infrastructure Layer
//!
//! Concrete implementations of the external services the verification proxy
//! depends on. Today that is a single provider:
//!
//! - **Verify**: Twilio Verify v2 over HTTPS using reqwest

use vp_core::errors::ProviderError;

/// Verification provider module - Twilio Verify client
pub mod verify;

pub use verify::{TwilioVerifyClient, TwilioVerifyConfig};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(reqwest::Error),

    /// Provider URL could not be built
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Provider answered with a non-2xx status
    #[error("got wrong status code: {0}")]
    Status(u16),
}

// The query string carries the destination and the code, so the URL is
// dropped before the error can be displayed or logged.
impl From<reqwest::Error> for InfrastructureError {
    fn from(err: reqwest::Error) -> Self {
        InfrastructureError::Http(err.without_url())
    }
}

impl From<InfrastructureError> for ProviderError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Status(code) => ProviderError::Status(code),
            InfrastructureError::Url(e) => ProviderError::InvalidUrl(e.to_string()),
            InfrastructureError::Http(e) => ProviderError::Transport(e.to_string()),
        }
    }
}
