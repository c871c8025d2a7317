//! Shared utilities and common types for the verification proxy
//!
//! This crate provides functionality used across all server modules:
//! - Credential and server configuration loaded from the environment
//! - Utility functions (phone masking for logs)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Credentials, EnvError, ServerConfig};
pub use utils::phone;
