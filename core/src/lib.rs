//! # Verify Proxy Core
//!
//! Domain layer for the verification proxy. Holds the verification entity
//! mirrored from the provider, the error taxonomy, and the service that turns
//! raw provider payloads into domain results.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
