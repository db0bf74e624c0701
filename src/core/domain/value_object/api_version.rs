use crate::core::domain::error::ValidationError;
use std::fmt;

/// API contract version sent when the caller does not pick one.
pub const DEFAULT_API_VERSION: &str = "2023-03-31";

/// The `version` query parameter: an ISO date (`YYYY-MM-DD`) selecting the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a validated API version.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_version(&value)?;
        Ok(Self(value))
    }

    /// Returns the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(DEFAULT_API_VERSION.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates an ISO calendar date in `YYYY-MM-DD` form.
pub(crate) fn validate_version(version: &str) -> Result<(), ValidationError> {
    if version.is_empty() {
        return Err(ValidationError::Field {
            field: "version".to_string(),
            message: "Version cannot be empty".to_string(),
        });
    }

    let parts: Vec<&str> = version.split('-').collect();
    let well_formed = parts.len() == 3
        && parts[0].len() == 4
        && parts[1].len() == 2
        && parts[2].len() == 2
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return Err(ValidationError::Format(
            "Version must be a date in YYYY-MM-DD format".to_string(),
        ));
    }

    let month: u32 = parts[1].parse().unwrap_or(0);
    let day: u32 = parts[2].parse().unwrap_or(0);
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Version '{}' is not a calendar date",
            version
        )));
    }

    Ok(())
}
