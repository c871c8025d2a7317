//! Verification route handlers
//!
//! - `POST /request` asks the provider to send a code
//! - `POST /verify` checks a code the user entered

pub mod request_code;
pub mod verify_code;

pub use request_code::request_code;
pub use verify_code::verify_code;
