//! Verification entity mirrored from the provider's verification object

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch
const ZERO_TIME_OFFSET_SECS: i64 = 62_135_596_800;

/// Timestamp reported for a field the provider left out
fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::default() - Duration::seconds(ZERO_TIME_OFFSET_SECS)
}

/// A single verification as reported by the provider.
///
/// Field names follow the provider's JSON so the object passes through
/// unchanged. Absent or `null` fields take their zero value; for the two
/// timestamps that is `0001-01-01T00:00:00Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verification {
    /// Provider identifier of this verification
    #[serde(deserialize_with = "null_as_default")]
    pub sid: String,
    /// Verify service the verification belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub service_sid: String,
    /// Account that owns the service
    #[serde(deserialize_with = "null_as_default")]
    pub account_sid: String,
    /// Destination the code was sent to
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    /// Delivery channel (sms, call, email, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub channel: String,
    /// Provider status (pending, approved, canceled, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Whether the submitted code matched
    #[serde(deserialize_with = "null_as_default")]
    pub valid: bool,
    #[serde(rename = "date_created", deserialize_with = "null_as_zero_time")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "date_updated", deserialize_with = "null_as_zero_time")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Verification {
    fn default() -> Self {
        Self {
            sid: String::new(),
            service_sid: String::new(),
            account_sid: String::new(),
            to: String::new(),
            channel: String::new(),
            status: String::new(),
            valid: false,
            created_at: zero_time(),
            updated_at: zero_time(),
        }
    }
}

impl Verification {
    /// Decode a provider response body.
    ///
    /// A JSON `null` yields the zero verification. An empty body is a decode
    /// error like any other malformed payload.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Option<Self>>(body).map(Option::unwrap_or_default)
    }

    /// Whether the provider accepted the submitted code
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_zero_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(deserializer).map(|time| time.unwrap_or_else(zero_time))
}
