use crate::{
    auth::{Authenticator, application::response::iam_token_response::IamTokenResponse},
    core::domain::{
        error::{ValidationError, VmwareError, VmwareResult},
        value_object::{AccessToken, ServiceUrl},
    },
};
use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use std::{
    fmt,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Public IAM endpoint.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const API_KEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// Exchanges an API key for a bearer token at the IAM token endpoint.
///
/// The token is cached and shared by every request of the client. Once 80%
/// of its lifetime has passed the next request fetches a new one; concurrent
/// requests wait on the same refresh instead of each issuing their own.
pub struct IamAuthenticator {
    api_key: String,
    iam_url: ServiceUrl,
    http_client: Client,
    default_headers: HeaderMap,
    token: RwLock<Option<AccessToken>>,
}

impl IamAuthenticator {
    /// Creates an authenticator against the public IAM endpoint.
    ///
    /// # Errors
    /// Returns `VmwareError::Validation` if the API key is empty and
    /// `VmwareError::Transport` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> VmwareResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(VmwareError::Validation(ValidationError::Field {
                field: "api_key".to_string(),
                message: "API key cannot be empty".to_string(),
            }));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| VmwareError::Transport(e.to_string()))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            api_key,
            iam_url: ServiceUrl::new(DEFAULT_IAM_URL)?,
            http_client,
            default_headers,
            token: RwLock::new(None),
        })
    }

    /// Points the authenticator at another IAM endpoint (private endpoints,
    /// staging, or a mock server).
    pub fn iam_url(mut self, url: impl AsRef<str>) -> VmwareResult<Self> {
        self.iam_url = ServiceUrl::new(url)?;
        Ok(self)
    }

    /// Drops the cached token so the next request fetches a new one.
    pub async fn invalidate(&self) {
        *self.token.write().await = None;
    }

    async fn request_token(&self) -> VmwareResult<AccessToken> {
        let url = self.iam_url.join_segments(&["identity", "token"])?;
        debug!(url = %url, "requesting IAM access token");

        let response = self
            .http_client
            .post(url)
            .headers(self.default_headers.clone())
            .form(&[
                ("grant_type", API_KEY_GRANT_TYPE),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| VmwareError::Transport(format!("IAM request failed: {}", e)))?;

        match response.status() {
            StatusCode::OK => self.handle_token_response(response).await,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(status = %response.status(), "IAM rejected the API key");
                Err(VmwareError::Authentication(
                    "IAM rejected the API key".to_string(),
                ))
            }
            status => {
                warn!(status = %status, "IAM token request failed");
                Err(VmwareError::Authentication(format!(
                    "Unexpected IAM response status: {}",
                    status
                )))
            }
        }
    }

    async fn handle_token_response(
        &self,
        response: reqwest::Response,
    ) -> VmwareResult<AccessToken> {
        let body = response.json::<IamTokenResponse>().await.map_err(|e| {
            VmwareError::Authentication(format!("Failed to parse IAM token response: {}", e))
        })?;

        let lifetime = body
            .expires_in
            .or_else(|| body.expiration.map(|at| at - unix_now()))
            .filter(|secs| *secs > 0)
            .map(|secs| Duration::from_secs(secs as u64))
            .unwrap_or(DEFAULT_TOKEN_LIFETIME);
        debug!(
            token_type = body.token_type.as_deref().unwrap_or("Bearer"),
            lifetime_secs = lifetime.as_secs(),
            "IAM access token refreshed"
        );

        AccessToken::new(body.access_token, lifetime).map_err(|e| {
            VmwareError::Authentication(format!("IAM returned an invalid token: {}", e))
        })
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn kind(&self) -> &'static str {
        "iam"
    }

    async fn authorization(&self) -> VmwareResult<Option<String>> {
        {
            let guard = self.token.read().await;
            if let Some(token) = guard.as_ref().filter(|t| !t.needs_refresh()) {
                return Ok(Some(token.as_bearer_header()));
            }
        }

        let mut guard = self.token.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(token) = guard.as_ref().filter(|t| !t.needs_refresh()) {
            return Ok(Some(token.as_bearer_header()));
        }

        let token = self.request_token().await?;
        let header = token.as_bearer_header();
        *guard = Some(token);
        Ok(Some(header))
    }
}

impl fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("iam_url", &self.iam_url.to_string())
            .field("api_key", &"<redacted>")
            .finish()
    }
}
