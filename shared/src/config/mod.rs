//! Configuration module
//!
//! - `credentials` - Provider credentials that must be present at startup
//! - `server` - HTTP listener address and connection timeouts

pub mod credentials;
pub mod server;

// Re-export commonly used types
pub use credentials::{env_lookup_with, Credentials, EnvError};
pub use server::ServerConfig;
