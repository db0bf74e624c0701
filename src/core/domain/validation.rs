//! Required-field presence checks run before any request is dispatched.

use crate::core::domain::error::ValidationError;

/// Implemented by every record that can be sent to the service.
///
/// Validation is limited to presence of required fields; server-side policy
/// (host count minimums, name formats, quota limits) is left to the service.
pub trait Validate {
    /// Returns the first missing required field, if any.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// A required string counts as unset when it is empty.
pub(crate) fn require_str(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(missing(field));
    }
    Ok(())
}

/// A required collection counts as unset when it has no elements.
pub(crate) fn require_items<T>(field: &str, items: &[T]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(missing(field));
    }
    Ok(())
}

fn missing(field: &str) -> ValidationError {
    ValidationError::Field {
        field: field.to_string(),
        message: format!("{} is required", field),
    }
}
