//! Internal HTTP client that renders requests, attaches credentials and turns
//! responses into models or errors.

use crate::core::domain::{
    error::{ValidationError, VmwareError, VmwareResult},
    model::{
        client_config::ClientConfig,
        detailed_response::{DetailedResponse, RawResponse},
        merge_patch::{MERGE_PATCH_CONTENT_TYPE, MergePatch},
        vmware_connection::VmwareConnection,
    },
    options::RequestHeaders,
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, Method,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{fmt, num::NonZeroU32, sync::Arc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const JSON_CONTENT_TYPE: &str = "application/json";

/// One HTTP call, described independently of the client that sends it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    headers: Vec<(String, String)>,
    body: Option<(&'static str, Vec<u8>)>,
}

impl ApiRequest {
    /// A request for the path made of `segments` under the service URL.
    /// Each segment is percent-encoded on its own.
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> VmwareResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            ValidationError::Format(format!("Failed to serialize request body: {}", e))
        })?;
        self.body = Some((JSON_CONTENT_TYPE, bytes));
        Ok(self)
    }

    /// Attaches a merge-patch body.
    pub fn merge_patch(mut self, patch: &MergePatch) -> VmwareResult<Self> {
        let bytes = serde_json::to_vec(patch).map_err(|e| {
            ValidationError::Format(format!("Failed to serialize merge patch: {}", e))
        })?;
        self.body = Some((MERGE_PATCH_CONTENT_TYPE, bytes));
        Ok(self)
    }

    /// Adds the per-operation headers.
    pub fn headers(mut self, headers: &RequestHeaders) -> Self {
        self.headers.extend(headers.pairs());
        self
    }
}

/// Sends [`ApiRequest`]s to the control plane.
///
/// Cloning is cheap: the connection pool, the rate limiter and the
/// authenticator are shared between clones. The client holds no per-call
/// state, so concurrent calls do not interfere.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<VmwareConnection>,
    config: Arc<ClientConfig>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `VmwareError::Validation` for an invalid rate limit and
    /// `VmwareError::Transport` if the HTTP client cannot be built.
    pub fn new(connection: VmwareConnection, config: ClientConfig) -> VmwareResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| VmwareError::Transport(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                rl.validate()?;
                let per_second = NonZeroU32::new(rl.requests_per_second)
                    .ok_or_else(|| VmwareError::missing_field("rate_limit.requests_per_second"))?;
                let burst = NonZeroU32::new(rl.burst_size)
                    .ok_or_else(|| VmwareError::missing_field("rate_limit.burst_size"))?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &VmwareConnection {
        &self.connection
    }

    /// Sends `request` and decodes a 2xx body into `T`.
    ///
    /// When `cancellation` fires first the call returns
    /// `VmwareError::Cancelled`; the in-flight request is dropped and nothing
    /// of its response is returned. A token that is already cancelled
    /// prevents any I/O.
    pub async fn execute<T>(
        &self,
        request: ApiRequest,
        cancellation: Option<&CancellationToken>,
    ) -> VmwareResult<DetailedResponse<T>>
    where
        T: DeserializeOwned,
    {
        match cancellation {
            Some(token) if token.is_cancelled() => Err(VmwareError::Cancelled),
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(method = %request.method, "request cancelled");
                        Err(VmwareError::Cancelled)
                    }
                    result = self.dispatch(&request) => result,
                }
            }
            None => self.dispatch(&request).await,
        }
    }

    async fn dispatch<T>(&self, request: &ApiRequest) -> VmwareResult<DetailedResponse<T>>
    where
        T: DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let mut url = self
            .connection
            .service_url()
            .join_segments(&request.segments)?;
        url.query_pairs_mut()
            .append_pair("version", self.connection.version().as_str());

        let mut req_builder = self
            .http_client
            .request(request.method.clone(), url.clone())
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if let Some(authorization) = self.connection.authenticator().authorization().await? {
            req_builder = req_builder.header(AUTHORIZATION, authorization);
        }

        for (name, value) in &request.headers {
            req_builder = req_builder.header(name.as_str(), value.as_str());
        }

        if let Some((content_type, body)) = &request.body {
            req_builder = req_builder
                .header(CONTENT_TYPE, *content_type)
                .body(body.clone());
        }

        debug!(method = %request.method, url = %url, "dispatching request");

        let response = req_builder
            .send()
            .await
            .map_err(|e| VmwareError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| VmwareError::Transport(format!("Failed to read response body: {}", e)))?;
        let raw = RawResponse {
            status,
            headers,
            body: body.to_vec(),
        };

        debug!(method = %request.method, status = %status, "received response");

        if !status.is_success() {
            return Err(service_error(raw));
        }

        match serde_json::from_slice::<T>(&raw.body) {
            Ok(result) => Ok(DetailedResponse {
                result,
                response: raw,
            }),
            Err(e) => Err(VmwareError::Decode {
                message: format!("Failed to parse response: {}", e),
                response: Box::new(raw),
            }),
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("connection", &self.connection)
            .field("config", &self.config)
            .finish()
    }
}

/// Builds a `Service` error, pulling the error code and message out of the
/// body when it has one of the shapes the platform uses.
fn service_error(raw: RawResponse) -> VmwareError {
    let (code, message) = serde_json::from_slice::<Value>(&raw.body)
        .map(|body| extract_error(&body))
        .unwrap_or((None, None));
    let message = message.unwrap_or_else(|| {
        raw.status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });

    warn!(
        status = %raw.status,
        code = code.as_deref().unwrap_or("-"),
        "service returned an error"
    );

    VmwareError::Service {
        status: raw.status,
        code,
        message,
        response: Box::new(raw),
    }
}

fn extract_error(body: &Value) -> (Option<String>, Option<String>) {
    if let Some(first) = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        return (
            string_field(first, &["code"]),
            string_field(first, &["message"]),
        );
    }
    (
        string_field(body, &["code", "errorCode"]),
        string_field(body, &["message", "errorMessage", "error"]),
    )
}

fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
