use crate::core::domain::error::ValidationError;
use std::time::Duration;

/// Client-side request throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.requests_per_second == 0 {
            return Err(ValidationError::Field {
                field: "rate_limit.requests_per_second".to_string(),
                message: "Requests per second must be greater than 0".to_string(),
            });
        }
        if self.burst_size == 0 {
            return Err(ValidationError::Field {
                field: "rate_limit.burst_size".to_string(),
                message: "Burst size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Transport settings applied to every request of a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound for one request, connect to last body byte.
    pub timeout: Duration,
    /// Throttling; `None` disables it.
    pub rate_limit: Option<RateLimitConfig>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            rate_limit: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}
