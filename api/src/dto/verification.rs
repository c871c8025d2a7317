use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Body of `POST /request`.
///
/// Neither field is validated here; missing fields decode as empty strings
/// and the provider decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestCodeRequest {
    /// Destination, usually an E.164 phone number
    #[serde(alias = "To", alias = "TO")]
    pub to: String,

    /// Delivery channel, e.g. "sms" or "call"
    #[serde(alias = "Channel", alias = "CHANNEL")]
    pub channel: String,
}

/// Body of `POST /verify`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifyCodeRequest {
    /// Destination the code was sent to
    #[serde(alias = "To", alias = "TO")]
    pub to: String,

    /// Code entered by the user
    #[serde(alias = "Code", alias = "CODE")]
    pub code: String,
}

/// Decode an inbound JSON body; a literal `null` yields the empty request.
pub fn decode_body<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    serde_json::from_slice::<Option<T>>(body).map(Option::unwrap_or_default)
}
