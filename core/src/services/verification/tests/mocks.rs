//! Mock provider for testing the verification service

use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::ProviderError;
use crate::services::verification::traits::VerificationProvider;

/// Provider call as observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Start { to: String, channel: String },
    Check { to: String, code: String },
}

// Mock provider that replays a canned answer for every call
pub struct MockProvider {
    pub response: Result<Vec<u8>, ProviderError>,
    pub calls: Mutex<Vec<Call>>,
}

impl MockProvider {
    pub fn replying(body: &str) -> Self {
        Self {
            response: Ok(body.as_bytes().to_vec()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationProvider for MockProvider {
    async fn start_verification(&self, to: &str, channel: &str) -> Result<Vec<u8>, ProviderError> {
        self.calls.lock().unwrap().push(Call::Start {
            to: to.to_string(),
            channel: channel.to_string(),
        });
        self.response.clone()
    }

    async fn check_verification(&self, to: &str, code: &str) -> Result<Vec<u8>, ProviderError> {
        self.calls.lock().unwrap().push(Call::Check {
            to: to.to_string(),
            code: code.to_string(),
        });
        self.response.clone()
    }
}
