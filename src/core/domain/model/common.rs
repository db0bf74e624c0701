//! Value records shared by several resource families.

use serde::{Deserialize, Serialize};

/// Identifies the resource group a new resource is billed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceGroupIdentity {
    /// Resource group ID.
    pub id: String,
}

impl ResourceGroupIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The resource group of an existing resource, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceGroupReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
}

/// Quotas, in GB, for each of the four file-share performance tiers.
///
/// Every tier is optional: an unset tier is left out of the request body,
/// while `Some(0)` is sent as an explicit zero quota.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileShares {
    /// 0.25 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_POINT_TWO_FIVE_IOPS_GB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_point_two_five_iops_gb: Option<i64>,
    /// 2 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_TWO_IOPS_GB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_two_iops_gb: Option<i64>,
    /// 4 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_FOUR_IOPS_GB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_four_iops_gb: Option<i64>,
    /// 10 IOPS/GB tier.
    #[serde(
        rename = "STORAGE_TEN_IOPS_GB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_ten_iops_gb: Option<i64>,
}

impl FileShares {
    pub fn storage_point_two_five_iops_gb(mut self, quota: i64) -> Self {
        self.storage_point_two_five_iops_gb = Some(quota);
        self
    }

    pub fn storage_two_iops_gb(mut self, quota: i64) -> Self {
        self.storage_two_iops_gb = Some(quota);
        self
    }

    pub fn storage_four_iops_gb(mut self, quota: i64) -> Self {
        self.storage_four_iops_gb = Some(quota);
        self
    }

    pub fn storage_ten_iops_gb(mut self, quota: i64) -> Self {
        self.storage_ten_iops_gb = Some(quota);
        self
    }
}

/// The kind of provider backing a PVDC (for example `paygo` or `reserved`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderType {
    pub name: String,
}
