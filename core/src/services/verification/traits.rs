//! Trait for verification provider integration

use async_trait::async_trait;

use crate::errors::ProviderError;

/// Transport to the third-party verification provider.
///
/// Implementations return the raw body of a 2xx response. Decoding is left
/// to [`VerificationService`](super::VerificationService).
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Ask the provider to deliver a code to `to` over `channel`
    async fn start_verification(&self, to: &str, channel: &str) -> Result<Vec<u8>, ProviderError>;

    /// Ask the provider whether `code` is the code sent to `to`
    async fn check_verification(&self, to: &str, code: &str) -> Result<Vec<u8>, ProviderError>;
}
