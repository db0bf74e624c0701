//! Shared machinery for JSON merge-patch (RFC 7396) bodies.
//!
//! Patch records keep the set of fields whose setters were called. Rendering
//! walks that set only: a touched field with a value becomes a key, a touched
//! field that was cleared becomes an explicit `null`, and untouched fields are
//! absent so the server leaves them unchanged.

use crate::core::domain::error::{ValidationError, VmwareResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Media type of a merge-patch request body.
pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

/// A merge-patch body: key → new value, `null` meaning delete.
pub type MergePatch = Map<String, Value>;

/// Names of the fields a caller touched on a patch record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TouchedFields(BTreeSet<&'static str>);

impl TouchedFields {
    pub(crate) fn touch(&mut self, field: &'static str) {
        self.0.insert(field);
    }

    pub(crate) fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Writes a touched field into `patch`; `None` renders as `null`.
pub(crate) fn insert_field<T: Serialize>(
    patch: &mut MergePatch,
    key: &str,
    value: Option<&T>,
) -> VmwareResult<()> {
    let value = match value {
        Some(value) => serde_json::to_value(value).map_err(|e| {
            ValidationError::Format(format!("Cannot render patch field '{}': {}", key, e))
        })?,
        None => Value::Null,
    };
    patch.insert(key.to_string(), value);
    Ok(())
}
