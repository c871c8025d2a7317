//! Main verification service implementation

use std::sync::Arc;

use vp_shared::phone::mask_phone_number;

use crate::domain::entities::Verification;
use crate::errors::{DomainError, DomainResult};

use super::traits::VerificationProvider;

/// Verification service proxying code requests and checks to a provider
pub struct VerificationService<P: VerificationProvider> {
    provider: Arc<P>,
}

impl<P: VerificationProvider> VerificationService<P> {
    /// Create a new verification service
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Request a verification code for `to` over `channel`.
    ///
    /// Neither value is validated; the provider is the authority on both.
    pub async fn request_code(&self, to: &str, channel: &str) -> DomainResult<Verification> {
        tracing::info!(
            to = %mask_phone_number(to),
            channel = channel,
            "Requesting verification code"
        );

        let body = self.provider.start_verification(to, channel).await?;
        let verification = Verification::from_slice(&body)?;

        tracing::debug!(
            sid = %verification.sid,
            status = %verification.status,
            "Verification started"
        );

        Ok(verification)
    }

    /// Check a submitted code for `to`.
    ///
    /// A well-formed provider answer whose `valid` flag is false becomes
    /// [`DomainError::CodeNotValid`].
    pub async fn check_code(&self, to: &str, code: &str) -> DomainResult<Verification> {
        tracing::info!(to = %mask_phone_number(to), "Checking verification code");

        let body = self.provider.check_verification(to, code).await?;
        let verification = Verification::from_slice(&body)?;

        if !verification.is_valid() {
            tracing::warn!(
                to = %mask_phone_number(to),
                status = %verification.status,
                "Verification code rejected by provider"
            );
            return Err(DomainError::CodeNotValid);
        }

        Ok(verification)
    }
}

impl<P: VerificationProvider> Clone for VerificationService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}
