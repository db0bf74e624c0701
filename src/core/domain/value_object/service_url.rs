use crate::core::domain::error::ValidationError;
use std::fmt;
use url::Url;

/// Production endpoint of the VMware-as-a-Service control plane.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.vmware.cloud.ibm.com/v1";

const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];
const MAX_URL_LENGTH: usize = 2083;

/// A validated base URL under which every API path is rendered.
///
/// Paths are appended segment by segment so server-issued identifiers are
/// percent-encoded rather than spliced into the string.
///
/// # Examples
///
/// ```
/// use vmware_aas::ServiceUrl;
///
/// let url = ServiceUrl::new("https://api.us-south.vmware.cloud.ibm.com/v1").unwrap();
/// let endpoint = url.join_segments(&["vdcs", "vdc 1"]).unwrap();
/// assert_eq!(
///     endpoint.as_str(),
///     "https://api.us-south.vmware.cloud.ibm.com/v1/vdcs/vdc%201"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Parses and validates a base URL.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        validate_url(value)?;
        let url = Url::parse(value)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(url))
    }

    /// Returns the underlying URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Appends path segments to the base URL, encoding each one.
    ///
    /// `.` and `..` are rejected. The URL parser drops them instead of
    /// encoding them, which would send the request to a parent collection.
    pub fn join_segments<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url, ValidationError> {
        let mut url = self.0.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ValidationError::ConstraintViolation("Service URL cannot be a base".to_string())
            })?;
            path.pop_if_empty();
            for segment in segments {
                let segment = segment.as_ref();
                if matches!(segment, "." | "..") {
                    return Err(ValidationError::ConstraintViolation(format!(
                        "Path segment '{segment}' is not a valid identifier"
                    )));
                }
                path.push(segment);
            }
        }
        Ok(url)
    }
}

impl Default for ServiceUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_SERVICE_URL).expect("default service URL is valid"))
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Validates a base URL string.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "service_url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }

    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(ValidationError::ConstraintViolation(
            "Service URL must be an absolute URL with a host".to_string(),
        ));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Service URL cannot carry a query or fragment".to_string(),
        ));
    }

    Ok(())
}
