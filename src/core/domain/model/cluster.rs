//! Domain models for clusters: homogeneous groups of bare-metal hosts inside
//! a PVDC.

use crate::core::domain::{
    error::{ValidationError, VmwareResult},
    model::{
        common::FileShares,
        merge_patch::{MergePatch, TouchedFields, insert_field},
    },
    validation::{Validate, require_str},
};
use serde::{Deserialize, Serialize};

/// A cluster as returned by `/director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Cluster {
    /// The cluster ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The cluster name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The hyperlink of the cluster resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// When the cluster was ordered (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<String>,
    /// When the cluster finished provisioning (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_at: Option<String>,
    /// Number of hosts in the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_count: Option<i64>,
    /// Provisioning status (e.g., "creating", "ready_to_use", "modifying").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Data center the hosts live in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_center_name: Option<String>,
    /// Host hardware profile (e.g., "BM_2S_20_CORES_192_GB").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_profile: Option<String>,
    /// Backing storage (e.g., "nfs").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    /// Billing plan (e.g., "monthly").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_plan: Option<String>,
    /// File-share quotas per performance tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_shares: Option<FileShares>,
}

/// Response of the cluster list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClusterCollection {
    #[serde(default)]
    pub clusters: Vec<Cluster>,
}

/// A cluster to create, nested in a PVDC prototype or sent on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClusterPrototype {
    pub name: String,
    pub host_count: i64,
    pub host_profile: String,
    pub file_shares: FileShares,
}

impl ClusterPrototype {
    pub fn new(
        name: impl Into<String>,
        host_count: i64,
        host_profile: impl Into<String>,
        file_shares: FileShares,
    ) -> Self {
        Self {
            name: name.into(),
            host_count,
            host_profile: host_profile.into(),
            file_shares,
        }
    }
}

impl Validate for ClusterPrototype {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("cluster.name", &self.name)?;
        require_str("cluster.host_profile", &self.host_profile)
    }
}

/// Legacy cluster creation record, carrying an explicit storage type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClusterOrderInfo {
    pub name: String,
    pub storage_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_count: Option<i64>,
    pub host_profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_shares: Option<FileShares>,
}

impl ClusterOrderInfo {
    pub fn new(
        name: impl Into<String>,
        storage_type: impl Into<String>,
        host_profile: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            storage_type: storage_type.into(),
            host_profile: host_profile.into(),
            ..Default::default()
        }
    }

    pub fn host_count(mut self, host_count: i64) -> Self {
        self.host_count = Some(host_count);
        self
    }

    pub fn file_shares(mut self, file_shares: FileShares) -> Self {
        self.file_shares = Some(file_shares);
        self
    }
}

impl Validate for ClusterOrderInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("cluster.name", &self.name)?;
        require_str("cluster.storage_type", &self.storage_type)?;
        require_str("cluster.host_profile", &self.host_profile)
    }
}

/// Partial cluster update rendered as a merge patch.
///
/// Only the fields whose setters were called appear in the rendered body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterPatch {
    host_count: Option<i64>,
    file_shares: Option<FileShares>,
    touched: TouchedFields,
}

impl ClusterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host_count(mut self, host_count: i64) -> Self {
        self.host_count = Some(host_count);
        self.touched.touch("host_count");
        self
    }

    pub fn file_shares(mut self, file_shares: FileShares) -> Self {
        self.file_shares = Some(file_shares);
        self.touched.touch("file_shares");
        self
    }

    /// Sends `"file_shares": null`, removing every quota.
    pub fn clear_file_shares(mut self) -> Self {
        self.file_shares = None;
        self.touched.touch("file_shares");
        self
    }

    /// True when no setter has been called.
    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Renders the touched fields as a merge-patch body.
    pub fn as_merge_patch(&self) -> VmwareResult<MergePatch> {
        let mut patch = MergePatch::new();
        if self.touched.contains("host_count") {
            insert_field(&mut patch, "host_count", self.host_count.as_ref())?;
        }
        if self.touched.contains("file_shares") {
            insert_field(&mut patch, "file_shares", self.file_shares.as_ref())?;
        }
        Ok(patch)
    }
}
