//! Verification provider module
//!
//! Implements [`VerificationProvider`](vp_core::services::VerificationProvider)
//! against the Twilio Verify v2 REST API.

pub mod twilio;

pub use twilio::{
    TwilioVerifyClient, TwilioVerifyConfig, DEFAULT_BASE_URL, VERIFICATIONS_PATH,
    VERIFICATION_CHECK_PATH,
};
