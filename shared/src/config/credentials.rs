//! Provider credential loading
//!
//! The three Twilio Verify values are read once at startup and never change
//! afterwards. A missing key aborts startup; there is no partial configuration.

use std::collections::HashMap;
use std::fmt;

/// Environment variable holding the Verify service SID
pub const SERVICE_SID_VAR: &str = "TWILIO_SERVICE_SID";
/// Environment variable holding the account SID (Basic Auth user)
pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
/// Environment variable holding the auth token (Basic Auth password)
pub const AUTH_TOKEN_VAR: &str = "TWILIO_TOKEN";

/// Every variable that must be present before the server may start
pub const REQUIRED_VARS: [&str; 3] = [SERVICE_SID_VAR, ACCOUNT_SID_VAR, AUTH_TOKEN_VAR];

/// A required environment variable was not set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{key}] is not present")]
pub struct EnvError {
    /// Name of the first missing variable
    pub key: String,
}

/// Look up every key in `keys` through `lookup`.
///
/// Fails on the first key that is absent. An empty value counts as present.
pub fn env_lookup_with<F>(keys: &[&str], lookup: F) -> Result<HashMap<String, String>, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut envs = HashMap::with_capacity(keys.len());
    for key in keys {
        let value = lookup(key).ok_or_else(|| EnvError {
            key: (*key).to_string(),
        })?;
        envs.insert((*key).to_string(), value);
    }
    Ok(envs)
}

/// Twilio Verify credentials shared read-only by all request handlers
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Verify service SID, scopes every provider URL
    pub service_sid: String,
    /// Account SID, sent as the Basic Auth user
    pub account_sid: String,
    /// Auth token, sent as the Basic Auth password
    pub auth_token: String,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(
        service_sid: impl Into<String>,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            service_sid: service_sid.into(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Load credentials from the process environment
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load credentials through an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut envs = env_lookup_with(&REQUIRED_VARS, lookup)?;
        let mut take = |key: &str| envs.remove(key).unwrap_or_default();

        Ok(Self {
            service_sid: take(SERVICE_SID_VAR),
            account_sid: take(ACCOUNT_SID_VAR),
            auth_token: take(AUTH_TOKEN_VAR),
        })
    }
}

// The auth token must never reach the logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("service_sid", &self.service_sid)
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}
