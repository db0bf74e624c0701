use serde::Deserialize;

/// Body returned by the IAM token endpoint.
#[derive(Debug, Deserialize)]
pub struct IamTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Expiry as a unix timestamp.
    #[serde(default)]
    pub expiration: Option<i64>,
}
