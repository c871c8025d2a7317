//! Domain services

pub mod verification;

pub use verification::{VerificationProvider, VerificationService};
