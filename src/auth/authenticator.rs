use crate::core::domain::{
    error::{ValidationError, VmwareResult},
    value_object::AccessToken,
};
use async_trait::async_trait;
use std::time::Duration;

/// Produces the `Authorization` header value attached to every request.
///
/// Implementations own their credential state (cached tokens, refresh
/// timing); the client only asks for a header right before sending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// A short name used in logs and `Debug` output.
    fn kind(&self) -> &'static str;

    /// Returns the header value, or `None` when requests go unauthenticated.
    async fn authorization(&self) -> VmwareResult<Option<String>>;
}

/// Sends a caller-supplied bearer token unchanged.
///
/// The token is never refreshed; use [`IamAuthenticator`](crate::IamAuthenticator)
/// for long-running processes.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: AccessToken,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            token: AccessToken::new(token, Duration::MAX)?,
        })
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn kind(&self) -> &'static str {
        "bearer_token"
    }

    async fn authorization(&self) -> VmwareResult<Option<String>> {
        Ok(Some(self.token.as_bearer_header()))
    }
}

/// Sends no `Authorization` header. Useful against local mocks and proxies
/// that inject credentials themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn kind(&self) -> &'static str {
        "none"
    }

    async fn authorization(&self) -> VmwareResult<Option<String>> {
        Ok(None)
    }
}
