use crate::core::domain::error::ValidationError;
use std::time::{Duration, SystemTime};

/// A bearer token issued by the IAM token service.
#[derive(Debug, Clone)]
pub struct AccessToken {
    value: String,
    created_at: SystemTime,
    lifetime: Duration,
}

impl AccessToken {
    /// Creates a validated token that expires `lifetime` after now.
    pub fn new(value: impl Into<String>, lifetime: Duration) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_access_token(&value)?;
        Ok(Self::new_unchecked(value, lifetime))
    }

    /// Creates a new token without validation.
    pub(crate) fn new_unchecked(value: String, lifetime: Duration) -> Self {
        Self {
            value,
            created_at: SystemTime::now(),
            lifetime,
        }
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the creation time.
    #[must_use]
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// True once the token has lived past its lifetime.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.has_lived(self.lifetime)
    }

    /// True once 80% of the lifetime has elapsed; the token still works but
    /// should be replaced before the next request.
    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        self.has_lived(self.lifetime.mul_f64(0.8))
    }

    fn has_lived(&self, span: Duration) -> bool {
        self.created_at
            .elapsed()
            .map(|age| age >= span)
            .unwrap_or(true)
    }

    /// Formats the token as an `Authorization` header value.
    #[must_use]
    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

/// Validates a bearer token string.
pub(crate) fn validate_access_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "access_token".to_string(),
            message: "Access token cannot be empty".to_string(),
        });
    }
    if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::Format(
            "Access token cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}
