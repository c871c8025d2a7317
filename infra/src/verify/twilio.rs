//! Twilio Verify Service Implementation
//!
//! This module talks to the Twilio Verify v2 API on behalf of the proxy.
//! It implements the VerificationProvider trait for production use.
//!
//! ## Behavior
//!
//! - Form parameters are sorted by key and sent both in the query string and
//!   as the request body
//! - HTTP Basic authentication with the account SID and auth token
//! - A single attempt per call; a failure is returned to the caller as-is
//! - Client-side timeout (5 seconds by default)
//! - Security: phone number masking in logs

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

use vp_core::errors::ProviderError;
use vp_core::services::VerificationProvider;
use vp_shared::config::Credentials;
use vp_shared::phone::mask_phone_number;

use crate::InfrastructureError;

/// Twilio Verify API root
pub const DEFAULT_BASE_URL: &str = "https://verify.twilio.com/v2";
/// Endpoint that starts a verification (sends a code)
pub const VERIFICATIONS_PATH: &str = "/Verifications";
/// Endpoint that checks a submitted code
pub const VERIFICATION_CHECK_PATH: &str = "/VerificationCheck";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Twilio Verify client configuration
#[derive(Debug, Clone)]
pub struct TwilioVerifyConfig {
    /// Service, account and token used for every call
    pub credentials: Credentials,
    /// API root without a trailing slash
    pub base_url: String,
    /// Timeout applied to each provider request
    pub request_timeout: Duration,
}

impl TwilioVerifyConfig {
    /// Configuration pointing at the public Twilio API
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Apply optional overrides from the process environment
    pub fn from_env(credentials: Credentials) -> Self {
        Self::from_lookup(credentials, |key| std::env::var(key).ok())
    }

    /// Apply optional overrides through an arbitrary variable source.
    ///
    /// `TWILIO_VERIFY_BASE_URL` replaces the API root and
    /// `TWILIO_REQUEST_TIMEOUT_SECS` the timeout. Unparsable values are ignored.
    pub fn from_lookup<F>(credentials: Credentials, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(credentials);
        if let Some(base_url) = lookup("TWILIO_VERIFY_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(secs) = lookup("TWILIO_REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Twilio Verify client
#[derive(Clone)]
pub struct TwilioVerifyClient {
    client: Client,
    config: TwilioVerifyConfig,
}

impl TwilioVerifyClient {
    /// Create a new Twilio Verify client
    pub fn new(config: TwilioVerifyConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        info!(
            "Twilio Verify client initialized for service {} ({})",
            config.credentials.service_sid, config.base_url
        );

        Ok(Self { client, config })
    }

    /// Build the URL of a service-scoped endpoint
    pub fn method_url(&self, path: &str) -> Result<Url, InfrastructureError> {
        let raw = format!(
            "{}/Services/{}{}",
            self.config.base_url, self.config.credentials.service_sid, path
        );
        Ok(Url::parse(&raw)?)
    }

    /// Issue one authenticated request and return the body of a 2xx answer.
    ///
    /// The encoded query of `url` doubles as the form body.
    pub async fn send(&self, method: Method, url: Url) -> Result<Vec<u8>, InfrastructureError> {
        let body = url.query().unwrap_or_default().to_string();
        let credentials = &self.config.credentials;

        debug!("{} {}", method, url.path());

        let response = self
            .client
            .request(method, url)
            .basic_auth(&credentials.account_sid, Some(&credentials.auth_token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let data = response.bytes().await?;

        if !status.is_success() {
            warn!("Twilio Verify answered with status {}", status.as_u16());
            return Err(InfrastructureError::Status(status.as_u16()));
        }

        Ok(data.to_vec())
    }

    /// POST `params` to a service-scoped endpoint.
    ///
    /// Pairs are encoded sorted by key.
    async fn post_form(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>, InfrastructureError> {
        let mut sorted = params.to_vec();
        sorted.sort_by_key(|(key, _)| *key);

        let mut url = self.method_url(path)?;
        url.query_pairs_mut().extend_pairs(sorted);

        self.send(Method::POST, url).await
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyClient {
    async fn start_verification(&self, to: &str, channel: &str) -> Result<Vec<u8>, ProviderError> {
        debug!(
            "Starting Twilio verification for {} via {}",
            mask_phone_number(to),
            channel
        );

        self.post_form(VERIFICATIONS_PATH, &[("To", to), ("Channel", channel)])
            .await
            .map_err(ProviderError::from)
    }

    async fn check_verification(&self, to: &str, code: &str) -> Result<Vec<u8>, ProviderError> {
        debug!("Checking Twilio verification for {}", mask_phone_number(to));

        self.post_form(VERIFICATION_CHECK_PATH, &[("To", to), ("Code", code)])
            .await
            .map_err(ProviderError::from)
    }
}
