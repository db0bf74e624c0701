//! Domain models for provider virtual data centers (PVDCs), the
//! data-center-scoped capacity containers inside a director site.

use crate::core::domain::{
    error::ValidationError,
    model::{
        cluster::{Cluster, ClusterOrderInfo, ClusterPrototype},
        common::ProviderType,
    },
    validation::{Validate, require_items, require_str},
};
use serde::{Deserialize, Serialize};

/// A PVDC as returned by `/director_sites/{site_id}/pvdcs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Pvdc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Data center hosting the PVDC (e.g., "dal10").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_center_name: Option<String>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Clusters in this PVDC, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<Cluster>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provider_types: Vec<ProviderType>,
}

/// Response of the PVDC list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PvdcCollection {
    #[serde(default)]
    pub pvdcs: Vec<Pvdc>,
}

/// A PVDC to create inside a director site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PvdcPrototype {
    pub name: String,
    pub data_center_name: String,
    pub clusters: Vec<ClusterPrototype>,
}

impl PvdcPrototype {
    pub fn new(
        name: impl Into<String>,
        data_center_name: impl Into<String>,
        clusters: Vec<ClusterPrototype>,
    ) -> Self {
        Self {
            name: name.into(),
            data_center_name: data_center_name.into(),
            clusters,
        }
    }
}

impl Validate for PvdcPrototype {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("pvdc.name", &self.name)?;
        require_str("pvdc.data_center_name", &self.data_center_name)?;
        require_items("pvdc.clusters", &self.clusters)?;
        self.clusters.validate()
    }
}

/// Legacy PVDC creation record; the data center travels as `data_center`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PvdcOrderInfo {
    pub name: String,
    pub data_center: String,
    pub clusters: Vec<ClusterOrderInfo>,
}

impl PvdcOrderInfo {
    pub fn new(
        name: impl Into<String>,
        data_center: impl Into<String>,
        clusters: Vec<ClusterOrderInfo>,
    ) -> Self {
        Self {
            name: name.into(),
            data_center: data_center.into(),
            clusters,
        }
    }
}

impl Validate for PvdcOrderInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("pvdc.name", &self.name)?;
        require_str("pvdc.data_center", &self.data_center)?;
        require_items("pvdc.clusters", &self.clusters)?;
        self.clusters.validate()
    }
}
