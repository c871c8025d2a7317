//! Verification service module
//!
//! Two operations are proxied to the provider:
//! - requesting a code for a destination over a channel
//! - checking a code the user submitted
//!
//! Provider payloads are decoded here, and a rejected code is turned into
//! [`DomainError::CodeNotValid`](crate::errors::DomainError::CodeNotValid).

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::VerificationService;
pub use traits::VerificationProvider;
