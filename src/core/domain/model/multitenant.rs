//! Domain models for the shared (multitenant) director sites that VDCs can
//! be placed on without a dedicated instance.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultitenantDirectorSite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Region of the site (e.g., "us-south").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pvdcs: Vec<MultitenantPvdc>,
}

/// A PVDC offered on a multitenant director site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultitenantPvdc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_center_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

/// Response of the multitenant director site list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultitenantDirectorSiteCollection {
    #[serde(default)]
    pub multitenant_director_sites: Vec<MultitenantDirectorSite>,
}
