//! Domain model for host profiles from the `/director_site_host_profiles`
//! endpoint.
//!
//! A host profile is the hardware SKU used for every host of a cluster.

use serde::{Deserialize, Serialize};

/// A bare-metal host profile that clusters can be ordered with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteHostProfile {
    /// Profile identifier (e.g., "BM_2S_20_CORES_192_GB").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Number of CPU cores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    /// CPU family (e.g., "Cascade Lake").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Processor model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    /// Memory in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    /// Number of sockets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<i64>,
    /// Clock speed (e.g., "2.20 GHz").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

/// Response of the host profile list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectorSiteHostProfileCollection {
    #[serde(default)]
    pub director_site_host_profiles: Vec<DirectorSiteHostProfile>,
}
