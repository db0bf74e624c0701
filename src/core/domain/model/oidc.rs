//! Domain model for the OIDC federation settings of a director site.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// OIDC configuration of a director site.
///
/// The service reports `status` and `last_set_at`; any provider-specific
/// fields it adds are kept verbatim in `provider` so they survive a
/// decode/encode cycle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OidcConfiguration {
    /// Configuration status (e.g., "pending", "added", "deleting").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the configuration was last applied (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_set_at: Option<String>,
    /// Provider fields, opaque to the client.
    #[serde(flatten)]
    pub provider: Map<String, Value>,
}
