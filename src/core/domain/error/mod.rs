use crate::core::domain::model::detailed_response::RawResponse;
use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for VMware-as-a-Service operations.
///
/// Every variant that was produced after a response arrived keeps the raw
/// response, so callers can inspect status, headers and body before deciding
/// whether to retry.
#[derive(Error, Debug)]
pub enum VmwareError {
    /// A required field was missing or a configuration value was invalid.
    /// No network activity took place.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not be sent or the response could not be read.
    ///
    /// # Fields
    /// * `0` - A description of what went wrong on the wire
    #[error("Transport error: {0}")]
    Transport(String),

    /// The authenticator could not produce a bearer token.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The service answered with a non-2xx status.
    ///
    /// # Fields
    /// * `status` - HTTP status of the response
    /// * `code` - Server-supplied error code, when the body carried one
    /// * `message` - Human-readable description
    /// * `response` - The raw response
    #[error("Service error ({status}): {message}")]
    Service {
        status: StatusCode,
        code: Option<String>,
        message: String,
        response: Box<RawResponse>,
    },

    /// A 2xx body could not be decoded into the expected model.
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        response: Box<RawResponse>,
    },

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl VmwareError {
    /// Returns the raw response attached to this error, if the server answered.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            VmwareError::Service { response, .. } | VmwareError::Decode { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// Returns the HTTP status attached to this error, if the server answered.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.response().map(|response| response.status)
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        VmwareError::Validation(ValidationError::Field {
            field: field.to_string(),
            message: format!("{} is required", field),
        })
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a VmwareError
pub type VmwareResult<T> = Result<T, VmwareError>;
